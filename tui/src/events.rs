//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use todo_view_core::{FetchOutcome, FetchTicket, Todo};

#[derive(Debug)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    ListFetched {
        ticket: FetchTicket,
        outcome: FetchOutcome<Vec<Todo>>,
    },
    DetailFetched {
        ticket: FetchTicket,
        outcome: FetchOutcome<Todo>,
    },
}
