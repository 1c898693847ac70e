//! Round engine
//!
//! Owns the playthrough state and turns ticks and taps into state
//! transitions and events. The host drains events each frame and feeds them
//! to presentation, audio and persistence.

use super::events::GameEvent;
use super::scoring::{score_stop, summarize};
use super::state::{FillDirection, Phase, RoundEngineState, Snapshot};
use super::tick::{CountdownOutcome, advance_countdown, advance_fill};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::highscores::HighScoreStore;

/// The game's state machine
pub struct RoundEngine {
    config: GameConfig,
    state: RoundEngineState,
    events: Vec<GameEvent>,
    store: Option<Box<dyn HighScoreStore>>,
}

impl RoundEngine {
    /// Create an engine with a known starting high score and no store
    pub fn new(config: GameConfig, high_score: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: RoundEngineState::new(high_score),
            events: Vec::new(),
            store: None,
        })
    }

    /// Create an engine that loads its high score from `store` and writes
    /// back every new maximum
    pub fn with_store(
        config: GameConfig,
        mut store: Box<dyn HighScoreStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let high_score = match store.load() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not load high score, starting at 0: {}", e);
                0
            }
        };
        log::info!("Loaded high score {}", high_score);
        Ok(Self {
            config,
            state: RoundEngineState::new(high_score),
            events: Vec::new(),
            store: Some(store),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase,
            fill_value: self.state.fill_value,
            fill_direction: self.state.fill_direction,
            current_round: self.state.current_round,
            total_rounds: self.config.total_rounds,
            accumulated_distance: self.state.accumulated_distance,
            high_score: self.state.high_score,
            round_end_remaining: self.state.round_end_remaining,
        }
    }

    /// Events emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Peek at undrained events
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            log::trace!("Ignoring tick with dt={}", dt);
            return;
        }

        match self.state.phase {
            Phase::Filling => {
                if advance_fill(&mut self.state, &self.config, dt) {
                    self.emit(GameEvent::FillChanged {
                        value: self.state.fill_value,
                    });
                }
            }
            Phase::RoundEnd => match advance_countdown(&mut self.state, &self.config, dt) {
                CountdownOutcome::Pending => {}
                CountdownOutcome::NextRound => {
                    log::debug!(
                        "Round {}/{} armed",
                        self.state.current_round,
                        self.config.total_rounds
                    );
                    self.emit(GameEvent::FillChanged { value: 0.0 });
                    self.emit(GameEvent::RoundStarted {
                        round: self.state.current_round,
                    });
                }
                CountdownOutcome::Finished => self.finish_game(),
            },
            Phase::Idle | Phase::WaitingStop | Phase::GameOver => {}
        }
    }

    /// Handle one (already debounced) tap
    pub fn tap(&mut self) {
        match self.state.phase {
            Phase::Idle => {
                if self.state.current_round == 0 {
                    self.state.current_round = 1;
                    self.emit(GameEvent::RoundStarted { round: 1 });
                }
                self.state.fill_direction = FillDirection::Up;
                self.state.phase = Phase::Filling;
                self.emit(GameEvent::FillStarted {
                    round: self.state.current_round,
                });
            }
            Phase::Filling | Phase::WaitingStop => self.stop(),
            Phase::RoundEnd | Phase::GameOver => {
                log::trace!("Tap ignored in {:?}", self.state.phase);
            }
        }
    }

    /// Start a fresh playthrough, keeping the high score
    pub fn restart(&mut self) {
        self.state.reset();
        log::info!("Restarted (high score {})", self.state.high_score);
        self.emit(GameEvent::Restarted);
        self.emit(GameEvent::FillChanged { value: 0.0 });
    }

    fn stop(&mut self) {
        let score = score_stop(self.state.current_round, self.state.fill_value, &self.config);
        self.state.set_fill(score.stopped_value);
        self.state.accumulated_distance = self
            .state
            .accumulated_distance
            .saturating_add(score.round_score);
        self.state.phase = Phase::RoundEnd;
        self.state.round_end_remaining = self.config.between_rounds_delay_seconds;

        log::debug!(
            "Round {} stopped at {:.2}: {} +{} (total {})",
            score.round,
            score.stopped_value,
            score.tier.as_str(),
            score.round_score,
            self.state.accumulated_distance
        );
        self.emit(GameEvent::RoundScored(score));
    }

    fn finish_game(&mut self) {
        let summary = summarize(self.state.accumulated_distance, self.state.high_score);
        log::info!(
            "Game over: distance {} (high score {})",
            summary.final_distance,
            summary.high_score
        );

        if summary.is_new_high_score {
            self.state.high_score = summary.high_score;
            log::info!("New high score: {}", summary.high_score);
            if let Some(store) = self.store.as_mut() {
                if let Err(e) = store.save(summary.high_score) {
                    log::warn!("Failed to persist high score: {}", e);
                }
            }
            self.emit(GameEvent::HighScorePersist {
                value: summary.high_score,
            });
        }

        self.emit(GameEvent::GameOver(summary));
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
