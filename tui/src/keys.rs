//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_view_core::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    First,
    Last,
    Select,
    SetFilter(Filter),
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('a') => Some(Action::SetFilter(Filter::All)),
        KeyCode::Char('o') => Some(Action::SetFilter(Filter::Open)),
        KeyCode::Char('c') => Some(Action::SetFilter(Filter::Completed)),
        _ => None,
    }
}

/// Key hint shown next to each filter control.
pub fn filter_key(filter: Filter) -> char {
    match filter {
        Filter::All => 'a',
        Filter::Open => 'o',
        Filter::Completed => 'c',
    }
}
