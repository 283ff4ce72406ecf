//! Unified error type for Sakuseikan.

use thiserror::Error;

use super::config::ConfigError;
use super::ui::UiError;

/// Every error the library can hand back to `main`.
///
/// The interaction controller itself never fails; invalid user actions are
/// no-ops. What can fail is the ambient setup around it.
#[derive(Debug, Error)]
pub enum SakuseiError {
    /// Pool configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal setup or teardown failed.
    #[error(transparent)]
    Ui(#[from] UiError),
}

impl SakuseiError {
    /// Whether the user can fix this by changing their input or files.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, SakuseiError::Config(_))
    }

    /// Get a user-facing message, with a hint where one exists.
    pub fn user_message(&self) -> String {
        match self {
            SakuseiError::Config(err) => format!("{err}\n{}", err.recovery_hint()),
            SakuseiError::Ui(err) => err.user_message().to_string(),
        }
    }
}
