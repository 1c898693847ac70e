//! Error types

use thiserror::Error;

/// Rejected gameplay configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("total_rounds must be at least 1")]
    ZeroRounds,
    #[error("fill_speed_per_second must be positive and finite (got {0})")]
    InvalidFillSpeed(f32),
    #[error("between_rounds_delay_seconds must be non-negative and finite (got {0})")]
    InvalidDelay(f32),
    #[error("perfect_epsilon must be within [0, 100] (got {0})")]
    EpsilonOutOfRange(f32),
    #[error("perfect_bonus_multiplier must be at least 1 (got {0})")]
    InvalidBonusMultiplier(f32),
    #[error("{rounds} perfect rounds at x{multiplier} exceed the distance range")]
    ScoreOverflow { rounds: u32, multiplier: f32 },
    #[error("config parse error")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read config")]
    Io(#[from] std::io::Error),
}

/// Failure reading or writing persisted values
#[derive(Error, Debug)]
pub enum PersistError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("bad save data")]
    Serde(#[from] serde_json::Error),
    #[error("storage is not available")]
    StorageUnavailable,
}
