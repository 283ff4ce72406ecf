//! Configuration: the content pools and the startup settings.

mod defaults;
mod pools;
mod startup;

pub use pools::{AnswerTemplate, PoolConfig, CARD_COUNT};
pub use startup::{
    default_pools_path, StartupConfig, DEFAULT_FLIGHT_LIFETIME, POOLS_ENV, SEED_ENV,
};
