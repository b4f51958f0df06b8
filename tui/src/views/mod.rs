//! Screen rendering.

pub mod detail;
pub mod filter_bar;
pub mod list;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub(crate) const PRIMARY: Color = Color::Cyan;
pub(crate) const DIM: Color = Color::DarkGray;
pub(crate) const ERROR: Color = Color::Red;

pub fn render_app(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, layout[0]);
    filter_bar::render(f, &app.list, layout[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[2]);
    list::render(f, app, body[0]);
    detail::render(f, &app.detail, body[1]);

    render_footer(f, layout[3]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!("Todos | {}", app.base_url);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(PRIMARY)));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, area: Rect) {
    let help = "j/k move • Enter select • a/o/c filter • q quit";
    let footer = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(DIM));
    f.render_widget(footer, area);
}
