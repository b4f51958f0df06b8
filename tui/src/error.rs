//! Error types for the TUI.

use crate::config::ConfigError;

/// Failures that end the program. Fetch failures never land here; views
/// keep them as state.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
