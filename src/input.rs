//! Tap input gating
//!
//! One physical tap can show up as several input events (mouse down plus
//! touch begin, bouncing switches). `TapGate` closes for a short window after
//! each accepted tap so the engine sees it once.

use crate::consts::TAP_DEBOUNCE_SECONDS;

#[derive(Debug, Clone)]
pub struct TapGate {
    window: f32,
    /// Seconds until the gate reopens
    cooldown: f32,
}

impl Default for TapGate {
    fn default() -> Self {
        Self::new(TAP_DEBOUNCE_SECONDS)
    }
}

impl TapGate {
    pub fn new(window: f32) -> Self {
        Self {
            window: window.max(0.0),
            cooldown: 0.0,
        }
    }

    /// Offer a raw tap. Returns true if it should reach the engine.
    pub fn accept(&mut self) -> bool {
        if self.cooldown > 0.0 {
            log::trace!("Tap debounced ({:.3}s left)", self.cooldown);
            return false;
        }
        self.cooldown = self.window;
        true
    }

    pub fn tick(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }
    }

    /// Re-arm immediately (restart)
    pub fn reset(&mut self) {
        self.cooldown = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.cooldown <= 0.0
    }
}
