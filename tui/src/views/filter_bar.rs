//! Filter bar: the three filter controls, always drawn.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use todo_view_core::ListView;

use super::{DIM, PRIMARY};
use crate::keys::filter_key;

pub fn render(f: &mut Frame<'_>, list: &ListView, area: Rect) {
    let active_style = Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let inactive_style = Style::default().fg(DIM);

    let spans: Vec<Span> = list
        .filter_controls()
        .iter()
        .map(|control| {
            let style = if control.active {
                active_style
            } else {
                inactive_style
            };
            Span::styled(
                format!(" [{}] {} ", filter_key(control.filter), control.label),
                style,
            )
        })
        .collect();

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().title("Filter").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
