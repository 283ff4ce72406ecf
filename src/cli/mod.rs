//! CLI module for Sakuseikan.
//!
//! The dispatcher runs early in `main()` to handle flags before the TUI starts:
//!
//! ```ignore
//! use sakuseikan::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Run(options) => { /* start the TUI */ }
//!     other => { /* print and exit */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, version_line, USAGE, VERSION};
