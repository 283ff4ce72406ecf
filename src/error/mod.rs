//! Error handling for Sakuseikan.
//!
//! - [`ConfigError`]: pool file loading and validation
//! - [`UiError`]: terminal setup and teardown
//! - [`SakuseiError`]: unifies the above for callers in `main`
//! - [`SakuseiResult`]: result alias
//!
//! The interaction controller has no error path at all.

mod config;
mod result;
mod sakusei_error;
mod ui;

pub use config::ConfigError;
pub use result::SakuseiResult;
pub use sakusei_error::SakuseiError;
pub use ui::UiError;
