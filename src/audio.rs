//! Sound cue selection
//!
//! Maps engine events to one-shot cues with a volume. Playback belongs to
//! the host's audio backend.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Gauge armed (soft ignition)
    Ignition,
    /// Stop registered, rocket fires
    Launch,
    /// Perfect stop sting
    Perfect,
}

impl SoundEffect {
    /// Volume before settings are applied
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::Ignition => 0.7,
            SoundEffect::Launch | SoundEffect::Perfect => 1.0,
        }
    }
}

/// A cue ready for playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Queues cues for the audio backend
#[derive(Debug, Clone, Default)]
pub struct AudioCues {
    gain: f32,
    queue: Vec<SoundCue>,
}

impl AudioCues {
    pub fn new(settings: &Settings) -> Self {
        Self {
            gain: settings.sfx_gain(),
            queue: Vec::new(),
        }
    }

    pub fn set_settings(&mut self, settings: &Settings) {
        self.gain = settings.sfx_gain();
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::FillStarted { .. } => self.play(SoundEffect::Ignition),
            GameEvent::RoundScored(score) => {
                self.play(SoundEffect::Launch);
                if score.is_perfect {
                    self.play(SoundEffect::Perfect);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        if self.gain <= 0.0 {
            return;
        }
        self.queue.push(SoundCue {
            effect,
            volume: effect.base_volume() * self.gain,
        });
    }

    /// Cues queued since the last drain
    pub fn drain(&mut self) -> std::vec::Drain<'_, SoundCue> {
        self.queue.drain(..)
    }
}
