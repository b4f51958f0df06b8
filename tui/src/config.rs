//! Configuration for the todo TUI.
//!
//! Every option can come from a flag or an environment variable; flags win.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use todo_view_core::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-tui", version, about = "Browse a todo collection in the terminal")]
pub struct TuiConfig {
    /// Collection endpoint; items are fetched from `{base_url}/{id}`.
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[arg(long, env = "TODO_REQUEST_TIMEOUT_MS", default_value_t = 10_000)]
    pub request_timeout_ms: u64,

    /// File that receives log output (the terminal is owned by the UI).
    #[arg(long, env = "TODO_LOG_FILE", default_value = "todo-tui.log")]
    pub log_file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    /// Parse flags and environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("must start with http:// or https://, got {url}"),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_file",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
