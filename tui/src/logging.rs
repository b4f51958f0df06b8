//! Log setup. Output goes to a file because the alternate screen owns stdout.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::TuiError;

const DEFAULT_DIRECTIVES: &str = "todo_tui=info,todo_view_core=info,warn";

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, TuiError> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(path: &Path) -> Result<(), TuiError> {
    let file = open_log_file(path)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))
}
