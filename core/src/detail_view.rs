//! State machine behind the single-todo detail pane.
//!
//! # Design
//! `DetailView` fetches its item independently of the list. Every id change
//! issues a new ticket and discards whatever the previous id had loaded; an
//! outcome for an older ticket is dropped instead of overwriting the newer
//! request's state. A failure sticks until the id changes.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::fetch::{fetch_todo, ApplyOutcome, FetchOutcome, FetchTicket, Transport};
use crate::types::{Todo, TodoId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    Loaded(Todo),
    Failed { message: String },
}

/// Display strings for a loaded item, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub title: String,
    pub id: String,
    pub user_id: String,
    pub status: &'static str,
}

impl DetailFields {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            id: todo.id.to_string(),
            user_id: todo.user_id.to_string(),
            status: todo.completion_label(),
        }
    }

    /// Title, id, owner id, completion label.
    pub fn lines(&self) -> [&str; 4] {
        [self.title.as_str(), self.id.as_str(), self.user_id.as_str(), self.status]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRender<'a> {
    /// Nothing selected yet.
    Empty,
    Loading,
    Failed { message: &'a str },
    Loaded(DetailFields),
}

#[derive(Debug, Clone, Default)]
pub struct DetailView {
    todo_id: Option<TodoId>,
    phase: DetailPhase,
    generation: u64,
}

impl DetailView {
    pub const LOADING_INDICATOR: &'static str = "loading todo";
    pub const ERROR_INDICATOR: &'static str = "error loading todo";

    pub fn new() -> Self {
        Self::default()
    }

    /// Point the view at `id`. Returns the ticket for the fetch to run, or
    /// `None` when `id` is already the current identifier.
    pub fn show(&mut self, id: TodoId) -> Option<FetchTicket> {
        if self.todo_id == Some(id) {
            return None;
        }
        self.todo_id = Some(id);
        self.generation += 1;
        self.phase = DetailPhase::Loading;
        debug!(id, generation = self.generation, "detail view loading");
        Some(FetchTicket::from_generation(self.generation))
    }

    pub fn apply(&mut self, ticket: FetchTicket, outcome: FetchOutcome<Todo>) -> ApplyOutcome {
        if ticket.generation() != self.generation || self.phase != DetailPhase::Loading {
            warn!(
                ticket = ticket.generation(),
                current = self.generation,
                "dropping stale todo outcome"
            );
            return ApplyOutcome::Stale;
        }
        self.phase = match outcome {
            FetchOutcome::Loaded(todo) => {
                debug!(id = todo.id, "detail view loaded");
                DetailPhase::Loaded(todo)
            }
            FetchOutcome::Failed(message) => {
                debug!(%message, "detail view failed");
                DetailPhase::Failed { message }
            }
        };
        ApplyOutcome::Applied
    }

    /// Show `id`, fetch and apply in one step. Returns `None` when the id
    /// was already current and nothing was fetched.
    pub async fn load<T>(
        &mut self,
        id: TodoId,
        client: &TodoClient,
        transport: &T,
    ) -> Option<ApplyOutcome>
    where
        T: Transport,
    {
        let ticket = self.show(id)?;
        let outcome = fetch_todo(client, transport, id).await;
        Some(self.apply(ticket, outcome))
    }

    pub fn todo_id(&self) -> Option<TodoId> {
        self.todo_id
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DetailPhase::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn todo(&self) -> Option<&Todo> {
        match &self.phase {
            DetailPhase::Loaded(todo) => Some(todo),
            _ => None,
        }
    }

    pub fn render(&self) -> DetailRender<'_> {
        match &self.phase {
            DetailPhase::Idle => DetailRender::Empty,
            DetailPhase::Loading => DetailRender::Loading,
            DetailPhase::Failed { message } => DetailRender::Failed { message },
            DetailPhase::Loaded(todo) => DetailRender::Loaded(DetailFields::from_todo(todo)),
        }
    }
}
