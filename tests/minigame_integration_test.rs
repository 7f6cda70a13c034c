//! Reel minigame integration tests
//!
//! Drives the public controller API the way a host does:
//! - Drift-only sessions fail at the bound
//! - Push displacement and saturation
//! - Progress monotonicity and exactly one outcome per session
//! - The documented activation scenarios

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reel::minigame::{
    MinigameConfig, MinigameEvent, MinigameListener, MinigameOutcome, ReelMinigame, ResponseCurve,
};

fn game() -> ReelMinigame {
    ReelMinigame::new(MinigameConfig::default()).unwrap()
}

/// Counts outcomes delivered through the listener.
#[derive(Default)]
struct Tally {
    starts: u32,
    successes: u32,
    fails: u32,
}

impl MinigameListener for Tally {
    fn on_start(&mut self) {
        self.starts += 1;
    }

    fn on_success(&mut self) {
        self.successes += 1;
    }

    fn on_fail(&mut self) {
        self.fails += 1;
    }
}

// ============================================================================
// Drift
// ============================================================================

#[test]
fn test_drift_only_fails_at_right_bound_in_bounded_time() {
    for &drift in &[0.1, 0.5, 1.2, 3.0, 10.0] {
        for &dt in &[0.001, 0.016, 0.1, 0.5] {
            let mut game = game();
            game.activate(drift, 0.5);

            let mut last = game.current_position();
            let mut outcome = None;
            let mut ticks = 0u32;
            while outcome.is_none() {
                outcome = game.tick(dt);
                assert!(
                    game.current_position() >= last,
                    "cursor moved back under drift (drift {}, dt {})",
                    drift,
                    dt
                );
                last = game.current_position();
                ticks += 1;
                assert!(ticks < 1_000_000, "drift {} dt {} never failed", drift, dt);
            }

            assert_eq!(outcome, Some(MinigameOutcome::Fail));
            assert!(game.current_position() >= game.config().right_bound);
            let elapsed = game.session().elapsed;
            assert!(
                elapsed <= 2.0 / drift + 1.0,
                "drift {} dt {} took {}s",
                drift,
                dt,
                elapsed
            );
        }
    }
}

#[test]
fn test_stronger_drift_fails_sooner() {
    let time_to_fail = |drift: f64| {
        let mut game = game();
        game.activate(drift, 0.5);
        while game.tick(0.016).is_none() {}
        game.session().elapsed
    };
    assert!(time_to_fail(3.0) < time_to_fail(1.0));
}

// ============================================================================
// Push
// ============================================================================

#[test]
fn test_push_moves_target_down_by_curve_value() {
    let mut game = game();
    game.activate(1.2, 0.5);
    let before = game.target_position();
    let expected = ResponseCurve::EaseInOut.evaluate(0.5 * game.config().push_scale);

    assert!(game.push());
    let moved = before - game.target_position();
    assert!(moved > 0.0);
    assert!((moved - expected).abs() < 1e-12);
    // Rendered cursor only catches up on tick
    assert_eq!(game.current_position(), 0.5);
}

#[test]
fn test_push_saturates_at_zero() {
    let mut game = game();
    game.activate(1.2, 100.0);
    game.push();
    assert_eq!(game.target_position(), 0.0);
    game.push();
    assert_eq!(game.target_position(), 0.0);
}

#[test]
fn test_pushes_between_ticks_each_count() {
    let mut single = game();
    single.activate(1.2, 0.5);
    single.push();

    let mut triple = game();
    triple.activate(1.2, 0.5);
    triple.push();
    triple.push();
    triple.push();

    let one = 0.5 - single.target_position();
    let three = 0.5 - triple.target_position();
    assert!((three - 3.0 * one).abs() < 1e-12);
    assert_eq!(triple.session().pushes, 3);
}

// ============================================================================
// Progress and outcomes
// ============================================================================

#[test]
fn test_progress_monotonic_and_single_outcome_under_random_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let config = MinigameConfig {
        push_scale: 0.05,
        ..Default::default()
    };

    for _ in 0..200 {
        let mut game = ReelMinigame::new(config.clone()).unwrap();
        game.activate(rng.gen_range(0.2..4.0), rng.gen_range(0.2..4.0));
        let mut last_progress = game.progress();
        let mut outcomes = 0;

        for _ in 0..2000 {
            if rng.gen_bool(0.2) {
                game.push();
            }
            if game.tick(rng.gen_range(0.0..0.05)).is_some() {
                outcomes += 1;
            }
            assert!(game.progress() >= last_progress);
            assert!(game.progress() <= game.config().max_progress);
            assert!((0.0..=1.0).contains(&game.current_position()));
            last_progress = game.progress();
        }

        assert!(outcomes <= 1);
        let events = game.take_events();
        let terminal = events
            .iter()
            .filter(|e| !matches!(e, MinigameEvent::Started))
            .count();
        assert_eq!(terminal, outcomes);
        if outcomes == 1 {
            assert!(!game.is_active());
            assert!(game.last_outcome().is_some());
        }
    }
}

#[test]
fn test_progress_frozen_after_outcome() {
    let mut game = game();
    game.activate(1.2, 0.5);
    while game.tick(0.05).is_none() {}
    let frozen = game.progress();
    let position = game.current_position();

    assert!(!game.push());
    assert_eq!(game.tick(1.0), None);
    assert_eq!(game.progress(), frozen);
    assert_eq!(game.current_position(), position);
}

#[test]
fn test_listener_receives_one_terminal_callback() {
    let mut game = game();
    let mut tally = Tally::default();
    game.activate(1.2, 0.5);
    for _ in 0..100 {
        game.tick(0.1);
    }
    game.dispatch_events(&mut tally);

    assert_eq!(tally.starts, 1);
    assert_eq!(tally.successes + tally.fails, 1);
}

#[test]
fn test_reactivation_restarts_session() {
    let mut game = game();
    game.activate(1.2, 0.5);
    game.tick(0.5);
    game.push();
    game.activate(2.0, 1.0);

    let session = game.session();
    assert!(session.active);
    assert_eq!(session.progress, 0.0);
    assert_eq!(session.current_position, 0.5);
    assert_eq!(session.target_position, 0.5);
    assert_eq!(session.drift_intensity, 2.0);
    assert_eq!(
        game.take_events(),
        vec![MinigameEvent::Started, MinigameEvent::Started]
    );
}

#[test]
fn test_progress_percent_tracks_max_progress() {
    let config = MinigameConfig {
        max_progress: 50.0,
        ..Default::default()
    };
    let mut game = ReelMinigame::new(config).unwrap();
    game.activate(1.2, 0.5);
    game.push();
    assert!((game.progress_percent() - 40.0).abs() < 1e-9);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_long_tick_without_input_fails() {
    let mut game = game();
    game.activate(1.2, 0.5);
    assert_eq!(game.tick(5.0), Some(MinigameOutcome::Fail));
    assert!(!game.is_active());
    assert_eq!(
        game.take_events(),
        vec![MinigameEvent::Started, MinigameEvent::Failed]
    );
}

#[test]
fn test_scenario_alternating_ticks_and_pushes_succeed() {
    // At the default push scale a 5.0 push throws the target straight to 0
    let config = MinigameConfig {
        push_scale: 0.01,
        ..Default::default()
    };

    // Both interleavings land the fish
    for push_first in [false, true] {
        let mut game = ReelMinigame::new(config.clone()).unwrap();
        game.activate(0.1, 5.0);
        let mut outcome = None;
        for _ in 0..20 {
            if push_first {
                game.push();
            }
            outcome = game.tick(0.1);
            if outcome.is_some() {
                break;
            }
            if !push_first {
                game.push();
            }
        }
        assert_eq!(outcome, Some(MinigameOutcome::Success));
        assert!(game.current_position() > config.left_bound);
        assert!(game.current_position() < config.right_bound);
    }
}

#[test]
fn test_scenario_huge_dt_approaches_edge_without_overshoot() {
    for dt in [1.0e6, 1.0e300, 1.0e308, f64::MAX] {
        let mut game = game();
        game.activate(1.2, 0.5);
        assert_eq!(game.tick(dt), Some(MinigameOutcome::Fail), "dt={}", dt);
        let position = game.current_position();
        assert!(position.is_finite(), "dt={} gave {}", dt, position);
        assert!(position <= 1.0);
        assert!(position > 0.99);
        assert!(!game.is_active());
    }
}

#[test]
fn test_invalid_dt_is_ignored() {
    let mut game = game();
    game.activate(1.2, 0.5);
    for dt in [-1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(game.tick(dt), None);
    }
    assert_eq!(game.progress(), 0.0);
    assert!(game.is_active());
}

#[test]
fn test_keyframe_curve_drives_push() {
    let config: MinigameConfig = serde_json::from_str(
        r#"{"response_curve": {"kind": "keyframes", "keys": [
            {"time": 0.0, "value": 0.0},
            {"time": 1.0, "value": 0.5}
        ]}}"#,
    )
    .unwrap();
    let mut game = ReelMinigame::new(config).unwrap();
    game.activate(1.2, 2.0);
    game.push();
    // 2.0 * 0.1 = 0.2 on a 0..0.5 ramp
    assert!((game.target_position() - 0.4).abs() < 1e-12);
}
