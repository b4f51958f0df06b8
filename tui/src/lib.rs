//! Terminal front end for the todo list/detail views.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod logging;
pub mod terminal;
pub mod transport;
pub mod views;
