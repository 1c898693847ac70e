//! Rocket Tap - a one-button timing arcade game
//!
//! Core modules:
//! - `sim`: Round/fill state machine and scoring (pure, deterministic)
//! - `config`: Validated gameplay configuration
//! - `input`: Tap debouncing
//! - `highscores`: High-score persistence collaborators
//! - `hud`, `effects`, `audio`: Presentation adapters driven by sim events
//! - `settings`: Player preferences

pub mod audio;
pub mod config;
pub mod effects;
pub mod error;
pub mod highscores;
pub mod hud;
pub mod input;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, PersistError};
pub use highscores::{HighScoreStore, MemoryStore};
pub use settings::Settings;
pub use sim::{GameEvent, Phase, RoundEngine, Snapshot, Tier};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Top of the fuel gauge
    pub const FILL_MAX: f32 = 100.0;

    /// Gameplay defaults
    pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;
    pub const DEFAULT_FILL_SPEED: f32 = 180.0;
    pub const DEFAULT_BETWEEN_ROUNDS_DELAY: f32 = 0.6;
    pub const DEFAULT_PERFECT_EPSILON: f32 = 0.5;
    pub const DEFAULT_PERFECT_BONUS: f32 = 1.12;

    /// Tier thresholds (stopped value, before any bonus)
    pub const GOOD_THRESHOLD: f32 = 75.0;
    pub const LATE_THRESHOLD: f32 = 40.0;

    /// Minimum time between two accepted taps
    pub const TAP_DEBOUNCE_SECONDS: f32 = 0.05;

    /// Feedback label
    pub const FEEDBACK_SHOW_SECONDS: f32 = 0.8;
    pub const FEEDBACK_PULSE_SCALE: f32 = 1.05;
    pub const FEEDBACK_PULSE_TIME: f32 = 0.22;

    /// Launch effects
    pub const SHAKE_DURATION: f32 = 0.22;
    pub const SHAKE_MAGNITUDE: f32 = 0.12;
    pub const FIRE_SCALE_UP: f32 = 1.2;
    pub const FIRE_SCALE_TIME: f32 = 0.12;
    pub const FIRE_KEEP_TIME: f32 = 0.55;
    pub const LAUNCH_HEIGHT_FACTOR: f32 = 0.05;
    pub const ROCKET_MOVE_TIME: f32 = 0.4;
    pub const PERFECT_FLASH_TIME: f32 = 0.25;
    /// Vertical spacing between stars in the trail
    pub const STAR_MOVE_DISTANCE: f32 = 30.0;
}

/// Hermite smoothstep of `t` in [0, 1]
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Round a non-negative value half-up to the nearest integer
#[inline]
pub fn round_half_up(value: f32) -> u32 {
    (value.max(0.0) + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(49.5), 50);
        assert_eq!(round_half_up(50.49), 50);
        assert_eq!(round_half_up(106.7), 107);
        assert_eq!(round_half_up(-3.0), 0);
    }

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(smoothstep(2.0), 1.0);
    }
}
