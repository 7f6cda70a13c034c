//! Drives the real reel controller with a scripted player.

use super::config::{BotConfig, SimConfig};
use super::report::SimReport;
use crate::error::ConfigError;
use crate::fishing::{difficulty_for_weight, CaughtFish};
use crate::minigame::{MinigameOutcome, ReelMinigame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Result of one simulated reel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    /// `None` for an empty hook.
    pub species: Option<String>,
    pub weight_g: f64,
    /// `None` when the run hit `max_secs_per_run`.
    pub outcome: Option<MinigameOutcome>,
    pub duration_secs: f64,
    pub pushes: u32,
}

impl RunStats {
    pub fn succeeded(&self) -> bool {
        self.outcome == Some(MinigameOutcome::Success)
    }

    pub fn timed_out(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Reacts to the cursor crossing a threshold after a fixed delay.
struct Bot<'a> {
    config: &'a BotConfig,
    reacting_for: Option<f64>,
}

impl<'a> Bot<'a> {
    fn new(config: &'a BotConfig) -> Self {
        Self {
            config,
            reacting_for: None,
        }
    }

    /// Whether to push on this frame.
    fn decide(&mut self, game: &ReelMinigame, dt: f64) -> bool {
        match self.reacting_for {
            None => {
                // Only react while the target is still past the line too,
                // otherwise a pending push would stack on the last one
                if game.current_position() >= self.config.push_threshold
                    && game.target_position() >= self.config.push_threshold
                {
                    self.reacting_for = Some(0.0);
                }
                false
            }
            Some(waited) => {
                let waited = waited + dt;
                if waited >= self.config.reaction_secs {
                    self.reacting_for = None;
                    true
                } else {
                    self.reacting_for = Some(waited);
                    false
                }
            }
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    config.validate()?;

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let catch = config.water.roll(&mut rng);
        let run = simulate_reel(config, catch.as_ref())?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} ({:.0}g): {} after {:.1}s, {} pushes",
                run_idx + 1,
                config.num_runs,
                run.species.as_deref().unwrap_or("Nothing"),
                run.weight_g,
                match run.outcome {
                    Some(MinigameOutcome::Success) => "landed",
                    Some(MinigameOutcome::Fail) => "escaped",
                    None => "timed out",
                },
                run.duration_secs,
                run.pushes
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// Plays one reel of `catch` at fixed frame steps until it ends or times out.
pub fn simulate_reel(
    config: &SimConfig,
    catch: Option<&CaughtFish>,
) -> Result<RunStats, ConfigError> {
    config.validate()?;
    let weight_g = catch.map_or(0.0, |fish| fish.weight_g);
    let (drift, push) = difficulty_for_weight(&config.rod, weight_g);

    let mut game = ReelMinigame::new(config.minigame.clone())?;
    game.activate(drift, push);

    let dt = config.frame_dt;
    let mut bot = Bot::new(&config.bot);
    let mut outcome = None;
    while game.session().elapsed < config.max_secs_per_run {
        if bot.decide(&game, dt) {
            game.push();
        }
        if let Some(result) = game.tick(dt) {
            outcome = Some(result);
            break;
        }
    }
    game.cancel();

    Ok(RunStats {
        species: catch.map(|fish| fish.name.clone()),
        weight_g,
        outcome,
        duration_secs: game.session().elapsed,
        pushes: game.session().pushes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::CatchTable;

    fn fish(weight_g: f64) -> CaughtFish {
        CaughtFish {
            name: "Test".to_string(),
            weight_g,
            price_per_gram: 1.0,
        }
    }

    #[test]
    fn test_idle_bot_loses_to_drift() {
        // Threshold past the edge: the bot never reacts
        let config = SimConfig {
            bot: BotConfig {
                push_threshold: 2.0,
                reaction_secs: 0.0,
            },
            ..Default::default()
        };
        let run = simulate_reel(&config, Some(&fish(500.0))).unwrap();
        assert_eq!(run.outcome, Some(MinigameOutcome::Fail));
        assert_eq!(run.pushes, 0);
        assert!(run.duration_secs < 5.0);
    }

    #[test]
    fn test_bot_lands_an_empty_hook() {
        let config = SimConfig::default();
        let run = simulate_reel(&config, None).unwrap();
        assert_eq!(run.outcome, Some(MinigameOutcome::Success));
        assert!(run.pushes > 0);
        assert_eq!(run.species, None);
    }

    #[test]
    fn test_times_out_when_nothing_happens() {
        let mut config = SimConfig::default();
        config.minigame.progress_per_second = 0.0;
        config.minigame.progress_per_click = 0.0;
        config.minigame.drift_scale = 1e-9;
        config.max_secs_per_run = 1.0;
        let run = simulate_reel(&config, None).unwrap();
        assert!(run.timed_out());
        assert!(run.duration_secs >= 1.0);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig::quick(42);
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.runs, b.runs);
        assert_eq!(a.num_runs, 100);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let mut config = SimConfig::quick(1);
        config.minigame.smooth_time = 0.0;
        assert!(run_simulation(&config).is_err());
    }

    #[test]
    fn test_unusable_frame_step_is_rejected() {
        for frame_dt in [f64::INFINITY, f64::NAN, 0.0, -0.5] {
            let config = SimConfig {
                frame_dt,
                ..SimConfig::quick(1)
            };
            assert!(simulate_reel(&config, None).is_err(), "frame_dt={}", frame_dt);
            assert!(run_simulation(&config).is_err());
        }
        let config = SimConfig {
            max_secs_per_run: f64::INFINITY,
            ..SimConfig::quick(1)
        };
        assert!(matches!(
            simulate_reel(&config, None),
            Err(ConfigError::NotFinite {
                field: "max_secs_per_run",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_water_always_reels_nothing() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(3),
            water: CatchTable::default(),
            ..Default::default()
        };
        let report = run_simulation(&config).unwrap();
        assert!(report.runs.iter().all(|r| r.species.is_none()));
    }
}
