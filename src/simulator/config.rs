//! Simulation configuration.

use crate::error::ConfigError;
use crate::fishing::{default_catch_table, CatchTable, RodConfig};
use crate::minigame::MinigameConfig;

/// How the simulated player reacts to the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    /// Cursor position at which the bot decides to push
    pub push_threshold: f64,

    /// Seconds between noticing the drift and pushing
    pub reaction_secs: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            push_threshold: 0.55,
            reaction_secs: 0.2,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of reels to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Fixed frame step in seconds
    pub frame_dt: f64,

    /// Give up on a reel after this many simulated seconds
    pub max_secs_per_run: f64,

    pub bot: BotConfig,
    pub minigame: MinigameConfig,
    pub rod: RodConfig,

    /// Catches are rolled from here; an empty hook reels at base difficulty
    pub water: CatchTable,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            frame_dt: 1.0 / 60.0,
            max_secs_per_run: 120.0,
            bot: BotConfig::default(),
            minigame: MinigameConfig::default(),
            rod: RodConfig::default(),
            water: default_catch_table(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for a quick balance check
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 100,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Checks the frame step and run cap along with the nested tuning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("frame_dt", self.frame_dt),
            ("max_secs_per_run", self.max_secs_per_run),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        self.minigame.validate()?;
        self.rod.validate()
    }
}
