//! File-backed tracing setup.
//!
//! Stdout belongs to the TUI, so log lines go to
//! `<cache dir>/sakuseikan/sakuseikan.log`. If the file cannot be opened the
//! subscriber is installed without an output layer rather than writing over
//! the screen.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SAKUSEIKAN_LOG";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "sakuseikan.log";

/// Path of the log file, if a cache directory is known.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("sakuseikan").join(LOG_FILE_NAME))
}

/// Build the filter from `SAKUSEIKAN_LOG`, then `RUST_LOG`, then `info`.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

/// Install the global subscriber.
///
/// Returns the log file path when file logging is active. Failure to install
/// (for example a subscriber already set) is ignored.
pub fn init_logging() -> Option<PathBuf> {
    let filter = build_filter();

    match open_log_file() {
        Some((path, file)) => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .try_init()
                .is_ok();
            if installed {
                tracing::info!(path = %path.display(), "Logging initialized");
                Some(path)
            } else {
                None
            }
        }
        None => {
            let _ = tracing_subscriber::registry().with(filter).try_init();
            None
        }
    }
}
