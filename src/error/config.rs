//! Configuration error types.
//!
//! Raised while loading and validating the prompt/card/reply pools. These
//! only surface at startup; once a [`PoolConfig`](crate::config::PoolConfig)
//! exists it is known to be usable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading or validating pool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The pool file could not be read.
    #[error("failed to read pool file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pool file is not valid JSON for the expected shape.
    #[error("failed to parse pools from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A pool has fewer entries than the app needs.
    #[error("pool `{pool}` needs at least {min} entries, found {found}")]
    TooFewEntries {
        pool: &'static str,
        min: usize,
        found: usize,
    },

    /// A pool contains an empty or whitespace-only entry.
    #[error("pool `{pool}` has a blank entry at position {index}")]
    BlankEntry { pool: &'static str, index: usize },

    /// The card pool lists the same image twice.
    #[error("card pool lists `{entry}` more than once")]
    DuplicateCard { entry: String },
}

impl ConfigError {
    /// Get a short hint for fixing the problem.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "Check that the --pools path exists and is readable.",
            ConfigError::Parse { .. } => {
                "The pool file must be a JSON object with `themes`, `card_images` and `reflections` arrays."
            }
            ConfigError::TooFewEntries { .. } => "Add more entries to the pool.",
            ConfigError::BlankEntry { .. } => "Remove empty strings from the pool.",
            ConfigError::DuplicateCard { .. } => "Each card image may only appear once.",
        }
    }
}
