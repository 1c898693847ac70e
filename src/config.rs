//! Gameplay configuration
//!
//! Supplied once at engine construction and never mutated afterwards.
//! Loadable from JSON; missing fields take the defaults below.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds per playthrough
    pub total_rounds: u32,
    /// Gauge units per second while filling
    pub fill_speed_per_second: f32,
    /// Bounce between 0 and 100 instead of pinning at 100
    pub ping_pong_mode: bool,
    /// Pause after a stop before the next round is armed
    pub between_rounds_delay_seconds: f32,
    /// Stops within this distance of 100 count as perfect
    pub perfect_epsilon: f32,
    /// Multiplier applied to perfect stops
    pub perfect_bonus_multiplier: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            fill_speed_per_second: DEFAULT_FILL_SPEED,
            ping_pong_mode: false,
            between_rounds_delay_seconds: DEFAULT_BETWEEN_ROUNDS_DELAY,
            perfect_epsilon: DEFAULT_PERFECT_EPSILON,
            perfect_bonus_multiplier: DEFAULT_PERFECT_BONUS,
        }
    }
}

impl GameConfig {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        let speed = self.fill_speed_per_second;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::InvalidFillSpeed(speed));
        }
        let delay = self.between_rounds_delay_seconds;
        if !delay.is_finite() || delay < 0.0 {
            return Err(ConfigError::InvalidDelay(delay));
        }
        let eps = self.perfect_epsilon;
        if !(0.0..=FILL_MAX).contains(&eps) {
            return Err(ConfigError::EpsilonOutOfRange(eps));
        }
        let bonus = self.perfect_bonus_multiplier;
        if !bonus.is_finite() || bonus < 1.0 {
            return Err(ConfigError::InvalidBonusMultiplier(bonus));
        }
        // Best case: every round a full-gauge perfect stop
        let best = f64::from(FILL_MAX) * f64::from(bonus) * f64::from(self.total_rounds);
        if best > f64::from(u32::MAX) {
            return Err(ConfigError::ScoreOverflow {
                rounds: self.total_rounds,
                multiplier: bonus,
            });
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Threshold at or above which a stop is perfect
    #[inline]
    pub fn perfect_threshold(&self) -> f32 {
        FILL_MAX - self.perfect_epsilon
    }
}
