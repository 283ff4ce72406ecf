//! Shared fixtures for integration tests.

#![allow(dead_code)]

use sakuseikan::app::App;
use sakuseikan::config::{PoolConfig, StartupConfig};

/// Short single-line pools so rendered text never wraps.
pub fn short_pools() -> PoolConfig {
    PoolConfig::new(
        vec!["What is time?".to_string()],
        vec![
            "stars/vega.png".to_string(),
            "stars/deneb.png".to_string(),
            "stars/altair.png".to_string(),
            "stars/spica.png".to_string(),
        ],
        vec!["The stars are listening.".to_string()],
    )
    .unwrap()
}

/// App with a fixed seed and the built-in pools.
pub fn seeded_app(seed: u64) -> App {
    App::from_config(&StartupConfig::default().with_seed(seed), PoolConfig::default())
}

/// App with a fixed seed and [`short_pools`].
pub fn short_app(seed: u64) -> App {
    App::from_config(&StartupConfig::default().with_seed(seed), short_pools())
}
