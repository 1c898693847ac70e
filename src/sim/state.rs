//! Round engine state
//!
//! Everything that changes during a playthrough lives here. Owned and
//! mutated only by `RoundEngine`; presentation reads `Snapshot` copies.

use serde::{Deserialize, Serialize};

use crate::consts::FILL_MAX;

/// Current phase of a playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a tap to arm the next round
    #[default]
    Idle,
    /// Gauge advancing; a tap stops it
    Filling,
    /// Gauge pinned at the top (linear mode), waiting for the stop tap
    WaitingStop,
    /// Stop scored, countdown to the next round running
    RoundEnd,
    /// All rounds consumed
    GameOver,
}

/// Direction the gauge is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillDirection {
    #[default]
    Up,
    Down,
}

impl FillDirection {
    /// Signed multiplier for the fill step
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            FillDirection::Up => 1.0,
            FillDirection::Down => -1.0,
        }
    }
}

/// Mutable per-playthrough state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundEngineState {
    pub phase: Phase,
    /// 0 before the first tap, 1-based afterwards, `total + 1` at game over
    pub current_round: u32,
    /// Gauge value in [0, 100]
    pub fill_value: f32,
    pub fill_direction: FillDirection,
    /// Sum of round scores this playthrough
    pub accumulated_distance: u32,
    /// Best final distance seen, survives restarts
    pub high_score: u32,
    /// Seconds left before the next round (only meaningful in RoundEnd)
    pub round_end_remaining: f32,
}

impl RoundEngineState {
    /// Fresh playthrough carrying over a known high score
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: Phase::Idle,
            current_round: 0,
            fill_value: 0.0,
            fill_direction: FillDirection::Up,
            accumulated_distance: 0,
            high_score,
            round_end_remaining: 0.0,
        }
    }

    /// Reset everything except the high score
    pub fn reset(&mut self) {
        *self = Self::new(self.high_score);
    }

    /// Put the gauge back at the bottom, moving up
    pub fn reset_gauge(&mut self) {
        self.fill_value = 0.0;
        self.fill_direction = FillDirection::Up;
    }

    /// Set the gauge, keeping it inside [0, 100]
    #[inline]
    pub fn set_fill(&mut self, value: f32) {
        self.fill_value = value.clamp(0.0, FILL_MAX);
    }
}

/// Read-only view polled by presentation layers each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub fill_value: f32,
    pub fill_direction: FillDirection,
    pub current_round: u32,
    pub total_rounds: u32,
    pub accumulated_distance: u32,
    pub high_score: u32,
    pub round_end_remaining: f32,
}

impl Snapshot {
    /// Rounds not yet played
    pub fn rounds_left(&self) -> u32 {
        self.total_rounds.saturating_sub(self.current_round)
    }

    /// Gauge as a 0-1 fraction (for fill bars)
    pub fn fill_fraction(&self) -> f32 {
        self.fill_value / FILL_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_high_score() {
        let mut state = RoundEngineState::new(42);
        state.phase = Phase::RoundEnd;
        state.current_round = 3;
        state.accumulated_distance = 180;
        state.fill_value = 55.0;
        state.fill_direction = FillDirection::Down;
        state.round_end_remaining = 0.3;

        state.reset();

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.current_round, 0);
        assert_eq!(state.accumulated_distance, 0);
        assert_eq!(state.fill_value, 0.0);
        assert_eq!(state.fill_direction, FillDirection::Up);
        assert_eq!(state.round_end_remaining, 0.0);
        assert_eq!(state.high_score, 42);
    }

    #[test]
    fn test_snapshot_helpers() {
        let snap = Snapshot {
            phase: Phase::Idle,
            fill_value: 25.0,
            fill_direction: FillDirection::Up,
            current_round: 4,
            total_rounds: 3,
            accumulated_distance: 0,
            high_score: 0,
            round_end_remaining: 0.0,
        };
        assert_eq!(snap.rounds_left(), 0);
        assert_eq!(snap.fill_fraction(), 0.25);
    }

    #[test]
    fn test_set_fill_clamps() {
        let mut state = RoundEngineState::new(0);
        state.set_fill(140.0);
        assert_eq!(state.fill_value, 100.0);
        state.set_fill(-5.0);
        assert_eq!(state.fill_value, 0.0);
    }
}
