//! Async fetch operations and the outcome type the views consume.
//!
//! # Design
//! A fetch never mutates view state. It runs build → transport → parse and
//! collapses every failure (transport, status, body) into the single message
//! carried by `FetchOutcome::Failed`. The owning view applies the outcome
//! together with the `FetchTicket` it issued when the fetch started.

use std::future::Future;

use tracing::{info, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Todo, TodoId};

/// Result of one fetch: the data, or the message a view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Failed(String),
}

impl<T> From<Result<T, ApiError>> for FetchOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => FetchOutcome::Loaded(data),
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }
}

/// Token identifying one fetch issued by a view.
///
/// Generations increase monotonically per view; a view only accepts the
/// outcome of the most recent ticket it handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    /// Rebuild a ticket from a generation number handed across a boundary
    /// (an FFI host, a channel message).
    pub fn from_generation(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a view took an outcome into its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The ticket was superseded or already answered; state is unchanged.
    Stale,
}

/// Executes `HttpRequest`s on behalf of the core.
///
/// Non-2xx statuses must come back as `Ok(HttpResponse)`; only failures that
/// produced no response at all map to `Err(ApiError::Transport)`.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// Retrieve the full collection.
pub async fn fetch_collection<T>(client: &TodoClient, transport: &T) -> FetchOutcome<Vec<Todo>>
where
    T: Transport,
{
    let request = client.build_list_todos();
    info!(path = %request.path, "fetching todo collection");
    let result = match transport.execute(request).await {
        Ok(response) => client.parse_list_todos(response),
        Err(err) => Err(err),
    };
    match &result {
        Ok(todos) => info!(count = todos.len(), "todo collection fetched"),
        Err(err) => warn!(error = %err, "todo collection fetch failed"),
    }
    result.into()
}

/// Retrieve a single item by identifier.
pub async fn fetch_todo<T>(client: &TodoClient, transport: &T, id: TodoId) -> FetchOutcome<Todo>
where
    T: Transport,
{
    let request = client.build_get_todo(id);
    info!(id, path = %request.path, "fetching todo");
    let result = match transport.execute(request).await {
        Ok(response) => client.parse_get_todo(response),
        Err(err) => Err(err),
    };
    if let Err(err) = &result {
        warn!(id, error = %err, "todo fetch failed");
    }
    result.into()
}
