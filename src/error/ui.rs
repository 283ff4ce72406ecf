//! UI-related error types.
//!
//! Errors that occur while setting up or restoring the terminal.

use std::io;

use thiserror::Error;

/// UI-specific error variants.
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal initialization failed.
    #[error("failed to initialize terminal: {0}")]
    TerminalInitFailed(#[source] io::Error),

    /// Terminal restore failed.
    #[error("failed to restore terminal: {0}")]
    TerminalRestoreFailed(#[source] io::Error),

    /// Failed to get terminal size.
    #[error("failed to read terminal size: {0}")]
    TerminalSizeFailed(#[source] io::Error),
}

impl UiError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed(_) => {
                "Failed to initialize the terminal. Please check your terminal settings."
            }
            UiError::TerminalRestoreFailed(_) => {
                "Failed to restore terminal. You may need to run `reset`."
            }
            UiError::TerminalSizeFailed(_) => {
                "Could not determine terminal size. Please resize your terminal window."
            }
        }
    }
}
