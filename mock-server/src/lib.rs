//! Read-only stand-in for the upstream todo collection.
//!
//! Serves `GET /todos` and `GET /todos/{id}` in the upstream JSON shape over
//! an in-memory collection ordered by id.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

pub type Db = Arc<BTreeMap<u64, Todo>>;

/// Deterministic collection: 20 items, 5 per owner, every third completed.
pub fn seed_todos() -> Vec<Todo> {
    (1..=20)
        .map(|id| Todo {
            user_id: (id - 1) / 5 + 1,
            id,
            title: format!("todo number {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

/// Router over the seeded collection.
pub fn app() -> Router {
    app_with(seed_todos())
}

/// Router over a caller-supplied collection.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(todos.into_iter().map(|t| (t.id, t)).collect());
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, seed_todos()).await
}

pub async fn run_with(listener: TcpListener, todos: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(todos)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    debug!(count = db.len(), "list todos");
    Json(db.values().cloned().collect())
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    debug!(id, "get todo");
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_in_upstream_shape() {
        let todo = Todo {
            user_id: 1,
            id: 5,
            title: "x".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 5);
        assert_eq!(json["title"], "x");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn seed_is_deterministic() {
        let todos = seed_todos();
        assert_eq!(todos.len(), 20);
        assert_eq!(todos, seed_todos());
        assert_eq!(todos.iter().filter(|t| t.completed).count(), 6);
        assert_eq!(todos[0].user_id, 1);
        assert_eq!(todos[19].user_id, 4);
    }
}
