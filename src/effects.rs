//! Launch effects timeline
//!
//! Turns engine events into time-based presentation state: feedback pulse,
//! camera shake, fire plume, rocket climb, perfect flash and the star trail.
//! Everything is a countdown advanced by `tick(dt)`, so a frame loop can
//! sample it and tests can drive it without a clock.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameEvent, RoundScore};
use crate::smoothstep;

/// Elapsed time of a running one-shot effect
#[derive(Debug, Clone, Copy, Default)]
struct Timer {
    elapsed: f32,
}

/// Rocket tween between two positions
#[derive(Debug, Clone, Copy)]
struct Flight {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
}

#[derive(Debug, Clone)]
pub struct Effects {
    settings: Settings,
    rng: Pcg32,
    feedback: Option<Timer>,
    shake: Option<Timer>,
    camera_offset: Vec2,
    fire: Option<Timer>,
    flash: Option<Timer>,
    rocket_start: Vec2,
    rocket_pos: Vec2,
    flight: Option<Flight>,
    stars: Vec<Vec2>,
    pending_vibrations: u32,
}

impl Effects {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            feedback: None,
            shake: None,
            camera_offset: Vec2::ZERO,
            fire: None,
            flash: None,
            rocket_start: Vec2::ZERO,
            rocket_pos: Vec2::ZERO,
            flight: None,
            stars: Vec::new(),
            pending_vibrations: 0,
        }
    }

    /// Place the rocket's launch pad
    pub fn with_rocket_start(mut self, start: Vec2) -> Self {
        self.rocket_start = start;
        self.rocket_pos = start;
        self
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundScored(score) => self.launch(score),
            GameEvent::Restarted => self.reset(),
            _ => {}
        }
    }

    fn launch(&mut self, score: &RoundScore) {
        self.feedback = Some(Timer::default());
        self.fire = Some(Timer::default());

        if self.settings.effective_screen_shake() {
            self.shake = Some(Timer::default());
        }

        let climb = Vec2::new(0.0, score.awarded_value * LAUNCH_HEIGHT_FACTOR);
        self.flight = Some(Flight {
            from: self.rocket_pos,
            to: self.rocket_pos + climb,
            elapsed: 0.0,
        });

        if score.is_perfect {
            if self.settings.effective_perfect_flash() {
                self.flash = Some(Timer::default());
            }
            if self.settings.effective_vibration() {
                self.pending_vibrations += 1;
            }
        }

        // Previous star slides down, new one appears at the origin
        if let Some(last) = self.stars.last_mut() {
            last.y -= STAR_MOVE_DISTANCE;
        }
        self.stars.push(Vec2::ZERO);
    }

    fn reset(&mut self) {
        self.feedback = None;
        self.shake = None;
        self.camera_offset = Vec2::ZERO;
        self.fire = None;
        self.flash = None;
        self.flight = None;
        self.rocket_pos = self.rocket_start;
        self.stars.clear();
        self.pending_vibrations = 0;
    }

    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        advance(&mut self.feedback, dt, FEEDBACK_SHOW_SECONDS);
        advance(&mut self.fire, dt, FIRE_KEEP_TIME);
        advance(&mut self.flash, dt, PERFECT_FLASH_TIME);

        advance(&mut self.shake, dt, SHAKE_DURATION);
        self.camera_offset = match self.shake {
            Some(timer) => {
                let damper = 1.0 - timer.elapsed / SHAKE_DURATION;
                let x = self.rng.random_range(-1.0f32..=1.0) * SHAKE_MAGNITUDE * damper;
                let y = self.rng.random_range(-1.0f32..=1.0) * SHAKE_MAGNITUDE * damper;
                Vec2::new(x, y)
            }
            None => Vec2::ZERO,
        };

        if let Some(flight) = self.flight.as_mut() {
            flight.elapsed += dt;
            let k = (flight.elapsed / ROCKET_MOVE_TIME).clamp(0.0, 1.0);
            self.rocket_pos = flight.from.lerp(flight.to, k);
            if k >= 1.0 {
                self.flight = None;
            }
        }
    }

    /// Feedback label should be shown
    pub fn feedback_visible(&self) -> bool {
        self.feedback.is_some()
    }

    /// Feedback label scale: pulses up to FEEDBACK_PULSE_SCALE and back
    pub fn feedback_scale(&self) -> f32 {
        let Some(timer) = self.feedback else {
            return 1.0;
        };
        let half = FEEDBACK_PULSE_TIME * 0.5;
        if timer.elapsed < half {
            lerp(1.0, FEEDBACK_PULSE_SCALE, smoothstep(timer.elapsed / half))
        } else if timer.elapsed < FEEDBACK_PULSE_TIME {
            lerp(
                FEEDBACK_PULSE_SCALE,
                1.0,
                smoothstep((timer.elapsed - half) / half),
            )
        } else {
            1.0
        }
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera_offset
    }

    pub fn fire_visible(&self) -> bool {
        self.fire.is_some()
    }

    /// Fire plume scale: grows to FIRE_SCALE_UP, then holds until the plume hides
    pub fn fire_scale(&self) -> f32 {
        match self.fire {
            Some(timer) if timer.elapsed < FIRE_SCALE_TIME => {
                lerp(1.0, FIRE_SCALE_UP, smoothstep(timer.elapsed / FIRE_SCALE_TIME))
            }
            Some(_) => FIRE_SCALE_UP,
            None => 1.0,
        }
    }

    /// Gauge flash alpha (1.0 when not flashing)
    pub fn flash_alpha(&self) -> f32 {
        match self.flash {
            Some(timer) => lerp(1.0, 0.3, ping_pong(timer.elapsed * 8.0, 1.0)),
            None => 1.0,
        }
    }

    pub fn rocket_position(&self) -> Vec2 {
        self.rocket_pos
    }

    /// Rocket height above its launch pad
    pub fn rocket_altitude(&self) -> f32 {
        self.rocket_pos.y - self.rocket_start.y
    }

    pub fn stars(&self) -> &[Vec2] {
        &self.stars
    }

    /// Consume one pending vibration request
    pub fn take_vibration(&mut self) -> bool {
        if self.pending_vibrations > 0 {
            self.pending_vibrations -= 1;
            true
        } else {
            false
        }
    }
}

/// Step a timer, dropping it once `duration` has passed
fn advance(timer: &mut Option<Timer>, dt: f32, duration: f32) {
    if let Some(t) = timer.as_mut() {
        t.elapsed += dt;
        if t.elapsed >= duration {
            *timer = None;
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Triangle wave between 0 and `length`
fn ping_pong(t: f32, length: f32) -> f32 {
    let period = length * 2.0;
    let r = t.rem_euclid(period);
    length - (r - length).abs()
}
