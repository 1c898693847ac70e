//! HUD text mirror
//!
//! Keeps the strings and visibility flags a UI layer shows, updated from
//! engine events. Rendering is up to the host.

use crate::round_half_up;
use crate::sim::{GameEvent, RoundScore, Summary, Tier};

pub const INSTRUCTION_TEXT: &str = "Inject Fuel\nTap again to Launch";

/// Per-stop feedback label
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub label: String,
    /// RGBA
    pub color: [f32; 4],
    pub tier: Tier,
}

impl Feedback {
    /// Label shows the raw stop (bonus not included)
    pub fn from_score(score: &RoundScore) -> Self {
        let added = round_half_up(score.stopped_value);
        let label = match score.tier {
            Tier::Perfect => format!("Perfect! +{}m", added),
            Tier::Good => format!("Good! +{}m", added),
            Tier::Late => format!("Late... +{}m", added),
            Tier::TooEarly => format!("Too Early! +{}m", added),
        };
        Self {
            label,
            color: tier_color(score.tier),
            tier: score.tier,
        }
    }
}

pub fn tier_color(tier: Tier) -> [f32; 4] {
    match tier {
        Tier::Perfect => [0.0, 1.0, 0.0, 1.0],
        Tier::Good => [0.2, 0.6, 1.0, 1.0],
        Tier::Late => [1.0, 0.6, 0.0, 1.0],
        Tier::TooEarly => [1.0, 0.0, 0.0, 1.0],
    }
}

#[derive(Debug, Clone)]
pub struct Hud {
    total_rounds: u32,
    pub instruction_visible: bool,
    pub gauge_visible: bool,
    /// Gauge as a 0-1 fraction
    pub gauge_fill: f32,
    pub rounds_text: String,
    pub rounds_left_text: String,
    pub feedback: Option<Feedback>,
    pub summary_text: Option<String>,
    pub high_score_text: Option<String>,
    pub restart_visible: bool,
}

impl Hud {
    pub fn new(total_rounds: u32) -> Self {
        Self {
            total_rounds,
            instruction_visible: true,
            gauge_visible: true,
            gauge_fill: 0.0,
            rounds_text: rounds_text(0, total_rounds),
            rounds_left_text: rounds_left_text(0, total_rounds),
            feedback: None,
            summary_text: None,
            high_score_text: None,
            restart_visible: false,
        }
    }

    pub fn instruction_text(&self) -> Option<&'static str> {
        self.instruction_visible.then_some(INSTRUCTION_TEXT)
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::FillChanged { value } => {
                self.gauge_fill = (value / 100.0).clamp(0.0, 1.0);
            }
            GameEvent::FillStarted { .. } => {
                self.instruction_visible = false;
            }
            GameEvent::RoundStarted { round } => {
                self.rounds_text = rounds_text(*round, self.total_rounds);
                self.rounds_left_text = rounds_left_text(*round, self.total_rounds);
            }
            GameEvent::RoundScored(score) => {
                self.feedback = Some(Feedback::from_score(score));
            }
            GameEvent::GameOver(summary) => self.show_summary(summary),
            GameEvent::HighScorePersist { .. } => {}
            GameEvent::Restarted => *self = Self::new(self.total_rounds),
        }
    }

    /// Hide the feedback label (driven by the effects timeline)
    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.gauge_visible = false;
        self.summary_text = Some(format!("Distance: {} m", summary.final_distance));
        self.high_score_text = Some(if summary.is_new_high_score {
            format!("New High Score! {} m", summary.high_score)
        } else {
            format!("High Score: {} m", summary.high_score)
        });
        self.restart_visible = true;
        self.rounds_text = rounds_text(self.total_rounds, self.total_rounds);
        self.rounds_left_text = rounds_left_text(self.total_rounds, self.total_rounds);
    }
}

fn rounds_text(current: u32, total: u32) -> String {
    format!("Rounds: {}/{}", current.min(total), total)
}

fn rounds_left_text(current: u32, total: u32) -> String {
    format!("Rounds Left: {}", total.saturating_sub(current))
}
