//! Full playthroughs through the public API

use std::sync::atomic::Ordering;

use rocket_tap::hud::Hud;
use rocket_tap::input::TapGate;
use rocket_tap::sim::{Summary, Tier};
use rocket_tap::{GameConfig, GameEvent, MemoryStore, Phase, RoundEngine};

fn config(rounds: u32) -> GameConfig {
    GameConfig {
        total_rounds: rounds,
        fill_speed_per_second: 100.0,
        between_rounds_delay_seconds: 0.6,
        perfect_epsilon: 5.0,
        perfect_bonus_multiplier: 1.1,
        ping_pong_mode: false,
    }
}

/// Arm, fill to 50, stop, wait out the delay
fn play_round_at_50(engine: &mut RoundEngine, events: &mut Vec<GameEvent>) {
    engine.tap();
    engine.tick(0.25);
    engine.tick(0.25);
    engine.tap();
    for _ in 0..3 {
        engine.tick(0.25);
    }
    events.extend(engine.drain_events());
}

fn summaries(events: &[GameEvent]) -> Vec<Summary> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::GameOver(s) => Some(*s),
            _ => None,
        })
        .collect()
}

fn persists(events: &[GameEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::HighScorePersist { value } => Some(*value),
            _ => None,
        })
        .collect()
}

#[test]
fn test_three_rounds_of_fifty() {
    let mut engine = RoundEngine::new(config(3), 0).unwrap();
    let mut events = Vec::new();

    for round in 1..=3 {
        play_round_at_50(&mut engine, &mut events);
        assert_eq!(engine.snapshot().accumulated_distance, 50 * round);
    }

    let snap = engine.snapshot();
    assert_eq!(snap.phase, Phase::GameOver);
    assert_eq!(snap.current_round, 4);
    assert_eq!(snap.accumulated_distance, 150);

    let scores: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundScored(s) => Some((s.round, s.round_score, s.tier)),
            _ => None,
        })
        .collect();
    assert_eq!(
        scores,
        vec![(1, 50, Tier::Late), (2, 50, Tier::Late), (3, 50, Tier::Late)]
    );

    let started: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundStarted { round } => Some(*round),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec![1, 2, 3]);

    let summary = summaries(&events);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].final_distance, 150);

    // Game over swallows taps and ticks
    engine.tap();
    engine.tick(1.0);
    assert_eq!(engine.phase(), Phase::GameOver);
    assert!(engine.drain_events().next().is_none());
}

#[test]
fn test_game_over_waits_for_the_last_delay() {
    let mut engine = RoundEngine::new(config(1), 0).unwrap();
    engine.tap();
    engine.tick(0.5);
    engine.tap();
    engine.tick(0.5);
    assert_eq!(engine.phase(), Phase::RoundEnd);
    assert!(summaries(&engine.drain_events().collect::<Vec<_>>()).is_empty());

    engine.tick(0.2);
    assert_eq!(engine.phase(), Phase::GameOver);
}

#[test]
fn test_high_score_is_persisted_once() {
    let store = MemoryStore::with_value(100);
    let saves = store.save_count_handle();
    let mut engine = RoundEngine::with_store(config(3), Box::new(store)).unwrap();
    assert_eq!(engine.snapshot().high_score, 100);

    let mut events = Vec::new();
    for _ in 0..3 {
        play_round_at_50(&mut engine, &mut events);
    }
    assert_eq!(persists(&events), vec![150]);
    assert_eq!(engine.snapshot().high_score, 150);
    let first = summaries(&events);
    assert_eq!(
        first,
        vec![Summary {
            final_distance: 150,
            high_score: 150,
            is_new_high_score: true
        }]
    );
    assert_eq!(saves.load(Ordering::SeqCst), 1);

    // Second playthrough: 50 + 50 + 20 = 120
    engine.restart();
    assert_eq!(engine.snapshot().high_score, 150);
    let mut events = Vec::new();
    play_round_at_50(&mut engine, &mut events);
    play_round_at_50(&mut engine, &mut events);
    engine.tap();
    engine.tick(0.2);
    engine.tap();
    engine.tick(1.0);
    events.extend(engine.drain_events());

    assert!(persists(&events).is_empty());
    assert_eq!(
        summaries(&events),
        vec![Summary {
            final_distance: 120,
            high_score: 150,
            is_new_high_score: false
        }]
    );
    assert_eq!(engine.snapshot().high_score, 150);
    assert_eq!(saves.load(Ordering::SeqCst), 1);
}

#[test]
fn test_ping_pong_stop_on_the_way_down() {
    let cfg = GameConfig {
        ping_pong_mode: true,
        ..config(1)
    };
    let mut engine = RoundEngine::new(cfg, 0).unwrap();
    engine.tap();
    engine.tick(1.25);
    assert_eq!(engine.phase(), Phase::Filling);
    assert_eq!(engine.snapshot().fill_value, 100.0);
    engine.tick(0.25);
    assert_eq!(engine.snapshot().fill_value, 75.0);

    engine.tap();
    let events: Vec<_> = engine.drain_events().collect();
    let score = events
        .iter()
        .find_map(|e| match e {
            GameEvent::RoundScored(s) => Some(*s),
            _ => None,
        })
        .unwrap();
    assert_eq!(score.round_score, 75);
    assert_eq!(score.tier, Tier::Good);
}

#[test]
fn test_debounced_double_tap_scores_nothing_extra() {
    let mut engine = RoundEngine::new(config(2), 0).unwrap();
    let mut gate = TapGate::default();

    // Physical tap reported twice in the same frame. Ungated, the second
    // report would stop the gauge at 0.
    for _ in 0..2 {
        if gate.accept() {
            engine.tap();
        }
    }
    assert_eq!(engine.phase(), Phase::Filling);

    gate.tick(0.1);
    engine.tick(0.1);
    assert!(gate.accept());
    engine.tap();
    assert_eq!(engine.phase(), Phase::RoundEnd);
    assert_eq!(engine.snapshot().accumulated_distance, 10);
}

#[test]
fn test_hud_follows_a_playthrough() {
    let mut engine = RoundEngine::new(config(2), 0).unwrap();
    let mut hud = Hud::new(2);
    let mut events = Vec::new();
    play_round_at_50(&mut engine, &mut events);
    play_round_at_50(&mut engine, &mut events);
    for event in &events {
        hud.apply(event);
    }

    assert_eq!(hud.rounds_text, "Rounds: 2/2");
    assert_eq!(hud.summary_text.as_deref(), Some("Distance: 100 m"));
    assert_eq!(hud.high_score_text.as_deref(), Some("New High Score! 100 m"));
    assert_eq!(
        hud.feedback.as_ref().map(|f| f.label.as_str()),
        Some("Late... +50m")
    );
    assert!(hud.restart_visible);

    engine.restart();
    for event in engine.drain_events() {
        hud.apply(&event);
    }
    assert!(hud.instruction_visible);
    assert_eq!(engine.snapshot().current_round, 0);
}
