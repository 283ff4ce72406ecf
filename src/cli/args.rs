//! Command-line argument parsing.

use std::path::PathBuf;

/// Options that shape a TUI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `--pools <PATH>`
    pub pools_path: Option<PathBuf>,
    /// `--seed <N>`
    pub seed: Option<u64>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` stop parsing where they appear. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use sakuseikan::cli::{parse_args, CliCommand};
///
/// let args = vec!["sakuseikan".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--pools" => match inline.or_else(|| args.next()) {
                Some(path) if !path.is_empty() => options.pools_path = Some(PathBuf::from(path)),
                _ => return CliCommand::Invalid("--pools needs a file path".to_string()),
            },
            "--seed" => {
                let Some(raw) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid("--seed needs a number".to_string());
                };
                match raw.parse::<u64>() {
                    Ok(seed) => options.seed = Some(seed),
                    Err(_) => {
                        return CliCommand::Invalid(format!("--seed expects a number, got {:?}", raw))
                    }
                }
            }
            _ => {}
        }
    }

    CliCommand::Run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["sakuseikan".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_version_short_flag() {
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
        assert_eq!(parse(&["--seed", "1", "--help"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_pools_and_seed() {
        assert_eq!(
            parse(&["--pools", "my/pools.json", "--seed", "42"]),
            CliCommand::Run(RunOptions {
                pools_path: Some(PathBuf::from("my/pools.json")),
                seed: Some(42),
            })
        );
    }

    #[test]
    fn test_parse_inline_values() {
        assert_eq!(
            parse(&["--seed=7", "--pools=p.json"]),
            CliCommand::Run(RunOptions {
                pools_path: Some(PathBuf::from("p.json")),
                seed: Some(7),
            })
        );
    }

    #[test]
    fn test_parse_missing_pools_path() {
        assert!(matches!(parse(&["--pools"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_bad_seed() {
        match parse(&["--seed", "soon"]) {
            CliCommand::Invalid(msg) => assert!(msg.contains("soon")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::Run(RunOptions::default()));
    }
}
