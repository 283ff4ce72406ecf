//! Terminal management with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into TUI mode and restores it when
//! dropped, whether the app exits normally or unwinds.
//!
//! ```no_run
//! use sakuseikan::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... run the app ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

use crate::error::{SakuseiResult, UiError};

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and the guard that restores it.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> SakuseiResult<Self> {
        enable_raw_mode().map_err(UiError::TerminalInitFailed)?;

        // From here on the guard undoes whatever was set up
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(UiError::TerminalInitFailed)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(UiError::TerminalInitFailed)?;
        terminal.clear().map_err(UiError::TerminalInitFailed)?;

        Ok(Self { terminal, guard })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Get the current terminal size.
    pub fn size(&self) -> SakuseiResult<Size> {
        Ok(self.terminal.size().map_err(UiError::TerminalSizeFailed)?)
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> SakuseiResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(UiError::TerminalRestoreFailed)?;
        Ok(())
    }
}
