//! Application state: the two views plus the list cursor.
//!
//! `App` never performs I/O. Actions that need a fetch return a `Command`
//! for the event loop to run; fetch results come back through
//! `list_fetched` / `detail_fetched`.

use todo_view_core::{
    ApplyOutcome, DetailView, FetchOutcome, FetchTicket, Filter, ListView, Todo, TodoId,
};
use tracing::{debug, info};

use crate::keys::Action;

/// Work the event loop must carry out on the app's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    FetchCollection(FetchTicket),
    FetchTodo { ticket: FetchTicket, id: TodoId },
}

#[derive(Debug)]
pub struct App {
    pub base_url: String,
    pub list: ListView,
    pub detail: DetailView,
    /// Index into the rendered rows.
    pub cursor: usize,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            list: ListView::new(),
            detail: DetailView::new(),
            cursor: 0,
        }
    }

    /// Mount the list view; the returned command starts its fetch.
    pub fn mount(&mut self) -> Command {
        Command::FetchCollection(self.list.mount())
    }

    pub fn handle_action(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Quit => return Some(Command::Quit),
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => {
                if self.cursor + 1 < self.list.row_count() {
                    self.cursor += 1;
                }
            }
            Action::First => self.cursor = 0,
            Action::Last => self.cursor = self.list.row_count().saturating_sub(1),
            Action::SetFilter(filter) => self.set_filter(filter),
            Action::Select => return self.select_current(),
        }
        None
    }

    fn set_filter(&mut self, filter: Filter) {
        self.list.set_filter(filter);
        self.clamp_cursor();
    }

    /// Activate the row under the cursor and point the detail view at it.
    fn select_current(&mut self) -> Option<Command> {
        let mut ticket = None;
        let id = self
            .list
            .activate(self.cursor, |id| ticket = self.detail.show(id))?;
        info!(id, "todo selected");
        ticket.map(|ticket| Command::FetchTodo { ticket, id })
    }

    pub fn list_fetched(&mut self, ticket: FetchTicket, outcome: FetchOutcome<Vec<Todo>>) {
        if self.list.apply(ticket, outcome) == ApplyOutcome::Applied {
            self.clamp_cursor();
        }
    }

    pub fn detail_fetched(&mut self, ticket: FetchTicket, outcome: FetchOutcome<Todo>) {
        let applied = self.detail.apply(ticket, outcome);
        debug!(?applied, "detail outcome");
    }

    /// Identifier of the row under the cursor, if any.
    pub fn highlighted(&self) -> Option<TodoId> {
        self.list.filtered().get(self.cursor).map(|t| t.id)
    }

    fn clamp_cursor(&mut self) {
        let rows = self.list.row_count();
        if self.cursor >= rows {
            self.cursor = rows.saturating_sub(1);
        }
    }
}
