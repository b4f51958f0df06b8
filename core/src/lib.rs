//! View-state core for a read-only todo list/detail UI.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO), and drives two view state machines
//! from the results:
//!
//! - `ListView`: fetches the collection once per mount and filters it
//!   client-side by completion status.
//! - `DetailView`: fetches one item per selected identifier.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the collection URL.
//! - Fetches return a `FetchOutcome` that the owning view applies together
//!   with the `FetchTicket` it issued, so an outdated response never
//!   overwrites a newer one.
//! - `Transport` is the seam hosts implement to run requests; non-2xx
//!   statuses, transport failures and malformed bodies all end up as the
//!   view's single error message.

pub mod client;
pub mod detail_view;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod http;
pub mod list_view;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use detail_view::{DetailFields, DetailPhase, DetailRender, DetailView};
pub use error::ApiError;
pub use fetch::{fetch_collection, fetch_todo, ApplyOutcome, FetchOutcome, FetchTicket, Transport};
pub use filter::Filter;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list_view::{FilterControl, ListPhase, ListRender, ListView};
pub use types::{Todo, TodoId};
