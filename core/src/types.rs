//! Domain DTOs for the upstream todo API.
//!
//! # Design
//! Field names follow the upstream JSON contract (`userId` in camelCase).
//! These types are defined independently from the mock-server crate;
//! integration tests catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// Identifier of a todo item. Positive and unique within a collection.
pub type TodoId = u64;

/// A single todo item returned by the API. Read-only once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Human-readable completion label shown by the detail view.
    pub fn completion_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Open"
        }
    }
}
