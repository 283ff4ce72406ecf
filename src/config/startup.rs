//! Startup configuration.
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::pools::PoolConfig;
use crate::cli::RunOptions;
use crate::error::ConfigError;

/// Environment variable naming a pool file.
pub const POOLS_ENV: &str = "SAKUSEIKAN_POOLS";

/// Environment variable holding a fixed random seed.
pub const SEED_ENV: &str = "SAKUSEIKAN_SEED";

/// How long a sent answer stays in flight before it is removed.
pub const DEFAULT_FLIGHT_LIFETIME: Duration = Duration::from_millis(1500);

/// Configuration for starting a session.
///
/// # Example
///
/// ```ignore
/// use sakuseikan::config::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_seed(7)
///     .with_pools_path("pools.json");
/// ```
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Pool file to load (None: user config dir, then built-ins)
    pub pools_path: Option<PathBuf>,
    /// Fixed seed for reproducible sessions
    pub seed: Option<u64>,
    /// Lifetime of each flight token
    pub flight_lifetime: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            pools_path: None,
            seed: None,
            flight_lifetime: DEFAULT_FLIGHT_LIFETIME,
        }
    }
}

impl StartupConfig {
    /// Create a new StartupConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pool file path.
    pub fn with_pools_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pools_path = Some(path.into());
        self
    }

    /// Set a fixed random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create config from `SAKUSEIKAN_POOLS` and `SAKUSEIKAN_SEED`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// An unparsable seed is ignored with a warning.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(POOLS_ENV).filter(|p| !p.trim().is_empty()) {
            config = config.with_pools_path(path);
        }

        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config = config.with_seed(seed),
                Err(_) => tracing::warn!("Ignoring {}={:?}: not a number", SEED_ENV, raw),
            }
        }

        config
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_run_options(mut self, options: RunOptions) -> Self {
        if let Some(path) = options.pools_path {
            self.pools_path = Some(path);
        }
        if let Some(seed) = options.seed {
            self.seed = Some(seed);
        }
        self
    }

    /// Load the pools this config points at.
    ///
    /// An explicit path must load. Without one, a `pools.json` in the user
    /// config directory is used if present, and the built-ins otherwise.
    pub fn load_pools(&self) -> Result<PoolConfig, ConfigError> {
        if let Some(path) = &self.pools_path {
            return PoolConfig::load(path);
        }

        match default_pools_path() {
            Some(path) if path.is_file() => PoolConfig::load(&path),
            _ => {
                tracing::info!("Using built-in pools");
                Ok(PoolConfig::default())
            }
        }
    }

    /// Build the random source for a session.
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                tracing::info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

/// Default pool file location: `<config dir>/sakuseikan/pools.json`.
pub fn default_pools_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sakuseikan").join("pools.json"))
}
