//! Todo detail pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use todo_view_core::{DetailRender, DetailView};

use super::{DIM, ERROR, PRIMARY};

pub fn render(f: &mut Frame<'_>, detail: &DetailView, area: Rect) {
    let block = Block::default().title("Todo Details").borders(Borders::ALL);

    let lines = match detail.render() {
        DetailRender::Empty => vec![Line::styled("Select a todo", Style::default().fg(DIM))],
        DetailRender::Loading => vec![Line::styled(
            DetailView::LOADING_INDICATOR,
            Style::default().fg(DIM),
        )],
        DetailRender::Failed { message } => vec![
            Line::styled(DetailView::ERROR_INDICATOR, Style::default().fg(ERROR)),
            Line::styled(message.to_string(), Style::default().fg(DIM)),
        ],
        DetailRender::Loaded(fields) => {
            let label = Style::default().fg(DIM);
            vec![
                Line::styled(
                    fields.title.clone(),
                    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                ),
                Line::from(vec![Span::styled("Id     ", label), Span::raw(fields.id.clone())]),
                Line::from(vec![Span::styled("Owner  ", label), Span::raw(fields.user_id.clone())]),
                Line::from(vec![Span::styled("Status ", label), Span::raw(fields.status)]),
            ]
        }
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use todo_view_core::{FetchOutcome, Todo};

    use crate::app::App;
    use crate::views::testing::screen;

    #[test]
    fn empty_until_selection() {
        let app = App::new("http://test/todos");
        assert!(screen(&app).contains("Select a todo"));
    }

    #[test]
    fn loaded_item_shows_all_fields() {
        let mut app = App::new("http://test/todos");
        let ticket = app.detail.show(5).unwrap();
        assert!(screen(&app).contains("loading todo"));

        app.detail_fetched(
            ticket,
            FetchOutcome::Loaded(Todo {
                id: 5,
                user_id: 1,
                title: "x".to_string(),
                completed: true,
            }),
        );
        let text = screen(&app);
        assert!(text.contains("Id     5"));
        assert!(text.contains("Owner  1"));
        assert!(text.contains("Status Completed"));
    }

    #[test]
    fn failure_shows_error_indicator() {
        let mut app = App::new("http://test/todos");
        let ticket = app.detail.show(77).unwrap();
        app.detail_fetched(ticket, FetchOutcome::Failed("transport failed: timeout".to_string()));
        let text = screen(&app);
        assert!(text.contains("error loading todo"));
        assert!(text.contains("transport failed: timeout"));
    }
}
