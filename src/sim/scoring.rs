//! Stop scoring and end-of-game summary

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::*;
use crate::round_half_up;

/// Qualitative rating of a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Perfect,
    Good,
    Late,
    TooEarly,
}

impl Tier {
    /// Rate a stopped value (first matching threshold wins)
    pub fn classify(stopped_value: f32, perfect_epsilon: f32) -> Self {
        if stopped_value >= FILL_MAX - perfect_epsilon {
            Tier::Perfect
        } else if stopped_value >= GOOD_THRESHOLD {
            Tier::Good
        } else if stopped_value >= LATE_THRESHOLD {
            Tier::Late
        } else {
            Tier::TooEarly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Perfect => "Perfect",
            Tier::Good => "Good",
            Tier::Late => "Late",
            Tier::TooEarly => "TooEarly",
        }
    }
}

/// Result of stopping the gauge once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundScore {
    /// Round this stop belongs to (1-based)
    pub round: u32,
    /// Gauge value at the stop, clamped to [0, 100]
    pub stopped_value: f32,
    /// Value after the perfect bonus
    pub awarded_value: f32,
    /// Points added to the distance
    pub round_score: u32,
    pub is_perfect: bool,
    pub tier: Tier,
}

/// Score a stop at `fill_value`
pub fn score_stop(round: u32, fill_value: f32, config: &GameConfig) -> RoundScore {
    let stopped_value = fill_value.clamp(0.0, FILL_MAX);
    let is_perfect = stopped_value >= config.perfect_threshold();
    let awarded_value = if is_perfect {
        stopped_value * config.perfect_bonus_multiplier
    } else {
        stopped_value
    };

    RoundScore {
        round,
        stopped_value,
        awarded_value,
        round_score: round_half_up(awarded_value),
        is_perfect,
        tier: Tier::classify(stopped_value, config.perfect_epsilon),
    }
}

/// End-of-playthrough report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub final_distance: u32,
    /// High score after this playthrough was counted
    pub high_score: u32,
    pub is_new_high_score: bool,
}

/// Compare a playthrough's distance against the previous high score
pub fn summarize(accumulated_distance: u32, previous_high: u32) -> Summary {
    let final_distance = accumulated_distance;
    let is_new_high_score = final_distance > previous_high;
    Summary {
        final_distance,
        high_score: if is_new_high_score {
            final_distance
        } else {
            previous_high
        },
        is_new_high_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonus_config() -> GameConfig {
        GameConfig {
            perfect_epsilon: 5.0,
            perfect_bonus_multiplier: 1.1,
            ..Default::default()
        }
    }

    #[test]
    fn test_perfect_bonus() {
        let score = score_stop(1, 97.0, &bonus_config());
        assert!(score.is_perfect);
        assert_eq!(score.tier, Tier::Perfect);
        assert!((score.awarded_value - 106.7).abs() < 1e-4);
        assert_eq!(score.round_score, 107);
    }

    #[test]
    fn test_just_below_perfect_gets_no_bonus() {
        let score = score_stop(1, 94.9, &bonus_config());
        assert!(!score.is_perfect);
        assert_eq!(score.tier, Tier::Good);
        assert_eq!(score.round_score, 95);
    }

    #[test]
    fn test_tier_boundaries() {
        let eps = 5.0;
        assert_eq!(Tier::classify(100.0, eps), Tier::Perfect);
        assert_eq!(Tier::classify(95.0, eps), Tier::Perfect);
        assert_eq!(Tier::classify(75.0, eps), Tier::Good);
        assert_eq!(Tier::classify(74.999, eps), Tier::Late);
        assert_eq!(Tier::classify(40.0, eps), Tier::Late);
        assert_eq!(Tier::classify(39.999, eps), Tier::TooEarly);
        assert_eq!(Tier::classify(0.0, eps), Tier::TooEarly);
    }

    #[test]
    fn test_wide_epsilon_shadows_lower_tiers() {
        // Perfect is checked first, so it wins over Good
        assert_eq!(Tier::classify(80.0, 30.0), Tier::Perfect);
    }

    #[test]
    fn test_stop_value_is_clamped() {
        let score = score_stop(2, 130.0, &GameConfig::default());
        assert_eq!(score.stopped_value, 100.0);
        assert_eq!(score.round, 2);
    }

    #[test]
    fn test_rounding_half_up() {
        let config = GameConfig::default();
        assert_eq!(score_stop(1, 49.5, &config).round_score, 50);
        assert_eq!(score_stop(1, 49.49, &config).round_score, 49);
    }

    #[test]
    fn test_summarize() {
        let first = summarize(150, 100);
        assert_eq!(first.final_distance, 150);
        assert_eq!(first.high_score, 150);
        assert!(first.is_new_high_score);

        let tie = summarize(150, 150);
        assert!(!tie.is_new_high_score);
        assert_eq!(tie.high_score, 150);

        let lower = summarize(120, 150);
        assert!(!lower.is_new_high_score);
        assert_eq!(lower.high_score, 150);
    }
}
