//! Typed events emitted by the round engine.

use serde::{Deserialize, Serialize};

use super::scoring::{RoundScore, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Gauge moved or was reset
    FillChanged { value: f32 },
    /// A tap armed the gauge for `round`
    FillStarted { round: u32 },
    /// Round counter advanced to a playable round
    RoundStarted { round: u32 },
    RoundScored(RoundScore),
    GameOver(Summary),
    /// High score increased; the receiver stores it durably
    HighScorePersist { value: u32 },
    Restarted,
}
