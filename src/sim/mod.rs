//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through `tick(dt)`
//! - Delays are countdown fields, never sleeps
//! - No rendering, audio or platform dependencies

pub mod engine;
pub mod events;
pub mod scoring;
pub mod state;
pub mod tick;

pub use engine::RoundEngine;
pub use events::GameEvent;
pub use scoring::{RoundScore, Summary, Tier, score_stop, summarize};
pub use state::{FillDirection, Phase, RoundEngineState, Snapshot};
pub use tick::{CountdownOutcome, advance_countdown, advance_fill};
