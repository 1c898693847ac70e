//! Rocket Tap headless driver
//!
//! Plays one game with a seeded bot at a fixed timestep, logging what the
//! HUD, effects and audio layers would show. Useful for tuning configs.
//!
//! Usage: rocket-tap [CONFIG.json] [--seed N] [--ping-pong] [--highscore PATH]
//!                   [--settings PATH]

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use rocket_tap::audio::AudioCues;
    use rocket_tap::consts::*;
    use rocket_tap::effects::Effects;
    use rocket_tap::highscores::JsonFileStore;
    use rocket_tap::hud::Hud;
    use rocket_tap::input::TapGate;
    use rocket_tap::{ConfigError, GameConfig, GameEvent, Phase, RoundEngine, Settings};

    /// Frame time the driver pretends to render at
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after this many frames (ten simulated minutes)
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    struct Args {
        config_path: Option<PathBuf>,
        seed: u64,
        ping_pong: bool,
        highscore_path: PathBuf,
        settings_path: PathBuf,
    }

    fn parse_args() -> Args {
        let mut args = Args {
            config_path: None,
            seed: 12345,
            ping_pong: false,
            highscore_path: PathBuf::from("rocket_tap_highscore.json"),
            settings_path: PathBuf::from("rocket_tap_settings.json"),
        };
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--seed" => match it.next().and_then(|s| s.parse().ok()) {
                    Some(seed) => args.seed = seed,
                    None => log::warn!("--seed needs a number, keeping {}", args.seed),
                },
                "--ping-pong" => args.ping_pong = true,
                "--highscore" => {
                    if let Some(path) = it.next() {
                        args.highscore_path = PathBuf::from(path);
                    }
                }
                "--settings" => {
                    if let Some(path) = it.next() {
                        args.settings_path = PathBuf::from(path);
                    }
                }
                other => args.config_path = Some(PathBuf::from(other)),
            }
        }
        args
    }

    /// Taps the gauge near a randomly chosen target
    struct Bot {
        rng: Pcg32,
        target: f32,
        /// Seconds to wait before arming the next round
        reaction: f32,
    }

    impl Bot {
        fn new(seed: u64) -> Self {
            let mut bot = Self {
                rng: Pcg32::seed_from_u64(seed),
                target: 0.0,
                reaction: 0.0,
            };
            bot.pick_target();
            bot
        }

        fn pick_target(&mut self) {
            self.target = 100.0 - self.rng.random_range(0.0f32..30.0);
            self.reaction = self.rng.random_range(0.1f32..0.4);
        }

        /// Decide whether to tap this step
        fn wants_tap(&mut self, engine: &RoundEngine, dt: f32) -> bool {
            let snap = engine.snapshot();
            match snap.phase {
                Phase::Idle => {
                    self.reaction -= dt;
                    self.reaction <= 0.0
                }
                Phase::Filling => snap.fill_value >= self.target,
                Phase::WaitingStop => true,
                Phase::RoundEnd | Phase::GameOver => false,
            }
        }
    }

    struct Game {
        engine: RoundEngine,
        gate: TapGate,
        hud: Hud,
        effects: Effects,
        audio: AudioCues,
        bot: Bot,
        accumulator: f32,
    }

    impl Game {
        /// Run simulation substeps for one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.step(SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        fn step(&mut self, dt: f32) {
            self.gate.tick(dt);
            if self.bot.wants_tap(&self.engine, dt) && self.gate.accept() {
                self.engine.tap();
            }
            self.engine.tick(dt);
            self.effects.tick(dt);
            if !self.effects.feedback_visible() {
                self.hud.clear_feedback();
            }

            let events: Vec<GameEvent> = self.engine.drain_events().collect();
            for event in &events {
                self.hud.apply(event);
                self.effects.apply(event);
                self.audio.apply(event);
                self.report(event);
            }
            for cue in self.audio.drain() {
                log::debug!("play {:?} at {:.2}", cue.effect, cue.volume);
            }
            if self.effects.take_vibration() {
                log::debug!("vibrate");
            }
        }

        fn report(&mut self, event: &GameEvent) {
            match event {
                GameEvent::RoundStarted { .. } => {
                    log::info!("{} | {}", self.hud.rounds_text, self.hud.rounds_left_text);
                }
                GameEvent::RoundScored(score) => {
                    if let Some(feedback) = &self.hud.feedback {
                        log::info!(
                            "{} (stopped at {:.1}, scored {})",
                            feedback.label,
                            score.stopped_value,
                            score.round_score
                        );
                    }
                    self.bot.pick_target();
                }
                GameEvent::GameOver(_) => {
                    if let Some(text) = &self.hud.summary_text {
                        log::info!("{}", text);
                    }
                    if let Some(text) = &self.hud.high_score_text {
                        log::info!("{}", text);
                    }
                }
                GameEvent::FillChanged { .. }
                | GameEvent::FillStarted { .. }
                | GameEvent::HighScorePersist { .. }
                | GameEvent::Restarted => {}
            }
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let args = parse_args();

        let mut config = match &args.config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).inspect_err(|e| {
                    log::error!("Cannot read {}: {}", path.display(), e);
                })?;
                GameConfig::from_json(&json)?
            }
            None => GameConfig::default(),
        };
        if args.ping_pong {
            config.ping_pong_mode = true;
        }

        let settings = Settings::load_from(&args.settings_path);
        let store = JsonFileStore::new(&args.highscore_path);
        let engine = RoundEngine::with_store(config.clone(), Box::new(store))?;
        log::info!(
            "Rocket Tap: {} rounds, speed {}, ping-pong {}, seed {}",
            config.total_rounds,
            config.fill_speed_per_second,
            config.ping_pong_mode,
            args.seed
        );

        let mut game = Game {
            engine,
            gate: TapGate::default(),
            hud: Hud::new(config.total_rounds),
            effects: Effects::new(settings.clone(), args.seed),
            audio: AudioCues::new(&settings),
            bot: Bot::new(args.seed),
            accumulator: 0.0,
        };
        log::info!("{}", game.hud.instruction_text().unwrap_or_default());

        let mut frames = 0;
        while game.engine.phase() != Phase::GameOver && frames < MAX_FRAMES {
            game.update(FRAME_DT);
            frames += 1;
        }

        let snap = game.engine.snapshot();
        if snap.phase != Phase::GameOver {
            log::warn!("Stopped after {} frames without finishing", frames);
        }
        println!(
            "distance {} m, high score {} m, rocket altitude {:.1}",
            snap.accumulated_distance,
            snap.high_score,
            game.effects.rocket_altitude()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the library directly
}
