//! Terminal setup and teardown.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::TuiError;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs `restore` when dropped.
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Switch to raw mode on the alternate screen. The guard puts the terminal
/// back when dropped, including when a step after raw mode fails.
pub fn enter() -> Result<(Tui, RestoreGuard<fn()>), TuiError> {
    enter_with(enable_raw_mode, open_alternate_screen, restore as fn())
}

fn enter_with<T, F: FnMut()>(
    enable: impl FnOnce() -> io::Result<()>,
    open: impl FnOnce() -> Result<T, TuiError>,
    restore: F,
) -> Result<(T, RestoreGuard<F>), TuiError> {
    enable()?;
    let guard = RestoreGuard::new(restore);
    let value = open()?;
    Ok((value, guard))
}

fn open_alternate_screen() -> Result<Tui, TuiError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn failed_screen_setup_restores_raw_mode() {
        let restored = Cell::new(0);
        let result = enter_with(
            || Ok(()),
            || Err::<(), _>(TuiError::Io(io::Error::other("no tty"))),
            || restored.set(restored.get() + 1),
        );
        assert!(matches!(result, Err(TuiError::Io(_))));
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn failed_raw_mode_restores_nothing() {
        let restored = Cell::new(0);
        let result = enter_with(
            || Err(io::Error::other("not a terminal")),
            || Ok(()),
            || restored.set(restored.get() + 1),
        );
        assert!(result.is_err());
        assert_eq!(restored.get(), 0);
    }

    #[test]
    fn successful_setup_restores_once_on_drop() {
        let restored = Cell::new(0);
        let (value, guard) = enter_with(|| Ok(()), || Ok(7), || restored.set(restored.get() + 1))
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(restored.get(), 0);
        drop(guard);
        assert_eq!(restored.get(), 1);
    }
}
