//! Todo list pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use todo_view_core::{ListRender, ListView, Todo};

use super::{DIM, ERROR, PRIMARY};
use crate::app::App;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default().title("Todo List").borders(Borders::ALL);

    match app.list.render() {
        ListRender::Loading => {
            let paragraph = Paragraph::new(ListView::LOADING_INDICATOR)
                .style(Style::default().fg(DIM))
                .block(block);
            f.render_widget(paragraph, area);
        }
        ListRender::Failed { message } => {
            let lines = vec![
                Line::styled(ListView::ERROR_INDICATOR, Style::default().fg(ERROR)),
                Line::styled(message.to_string(), Style::default().fg(DIM)),
            ];
            let paragraph = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(block);
            f.render_widget(paragraph, area);
        }
        ListRender::Rows(rows) => {
            let items: Vec<ListItem> = rows.iter().map(row_item).collect();
            let mut state = ListState::default();
            if !rows.is_empty() {
                state.select(Some(app.cursor));
            }
            let list = List::new(items)
                .block(block.title_bottom(format!("{} shown", rows.len())))
                .highlight_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

/// Title, completion box, id and owner for one row.
fn row_item(todo: &Todo) -> ListItem<'_> {
    let check = if todo.completed { "[x]" } else { "[ ]" };
    ListItem::new(Line::from(vec![
        Span::raw(format!("{check} ")),
        Span::raw(todo.title.as_str()),
        Span::styled(
            format!("  #{} user {}", todo.id, todo.user_id),
            Style::default().fg(DIM),
        ),
    ]))
}
