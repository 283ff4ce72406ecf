//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: sakuseikan [OPTIONS]

Pick a star, answer its question, and let the answer fly.

Options:
  --pools <PATH>   Load themes, cards and replies from a JSON file
  --seed <N>       Use a fixed random seed
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  SAKUSEIKAN_POOLS  Same as --pools
  SAKUSEIKAN_SEED   Same as --seed
  SAKUSEIKAN_LOG    Log filter (falls back to RUST_LOG, default: info)";

/// Version line, e.g. `sakuseikan 0.1.0`.
pub fn version_line() -> String {
    format!("sakuseikan {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() {
    println!("{}", version_line());
}

/// Handle the --help command.
pub fn handle_help_command() {
    println!("{}\n\n{}", version_line(), USAGE);
}
