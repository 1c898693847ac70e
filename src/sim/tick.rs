//! Fill simulation and round-end countdown
//!
//! Time-driven half of the state machine. Taps are handled by the engine.

use super::state::{FillDirection, Phase, RoundEngineState};
use crate::config::GameConfig;
use crate::consts::FILL_MAX;

/// What a countdown step decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Delay still running (or not in RoundEnd)
    Pending,
    /// Next round armed
    NextRound,
    /// Last round consumed
    Finished,
}

/// Advance the gauge by `dt` seconds. Returns true if the value changed.
pub fn advance_fill(state: &mut RoundEngineState, config: &GameConfig, dt: f32) -> bool {
    if state.phase != Phase::Filling {
        return false;
    }

    let before = state.fill_value;
    let v = before + state.fill_direction.sign() * config.fill_speed_per_second * dt;

    if !config.ping_pong_mode {
        if v >= FILL_MAX {
            state.set_fill(FILL_MAX);
            state.phase = Phase::WaitingStop;
            log::trace!("Gauge topped out, waiting for stop");
        } else {
            // Floor only matters for a negative speed
            state.set_fill(v);
        }
    } else if v >= FILL_MAX {
        state.set_fill(FILL_MAX);
        state.fill_direction = FillDirection::Down;
    } else if v <= 0.0 {
        state.set_fill(0.0);
        state.fill_direction = FillDirection::Up;
    } else {
        state.fill_value = v;
    }

    state.fill_value != before
}

/// Run the between-rounds delay. On expiry the round counter advances.
pub fn advance_countdown(state: &mut RoundEngineState, config: &GameConfig, dt: f32) -> CountdownOutcome {
    if state.phase != Phase::RoundEnd {
        return CountdownOutcome::Pending;
    }

    state.round_end_remaining -= dt;
    if state.round_end_remaining > 0.0 {
        return CountdownOutcome::Pending;
    }
    state.round_end_remaining = 0.0;

    state.current_round += 1;
    if state.current_round > config.total_rounds {
        state.phase = Phase::GameOver;
        CountdownOutcome::Finished
    } else {
        state.reset_gauge();
        state.phase = Phase::Idle;
        CountdownOutcome::NextRound
    }
}
