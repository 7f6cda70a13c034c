//! Reel balance simulator for Monte Carlo analysis.
//!
//! Runs a scripted bot against the real [`ReelMinigame`](crate::minigame::ReelMinigame)
//! over catches rolled from a catch table, to see how hard each species is
//! to land with a given tuning.

mod config;
mod report;
mod runner;

pub use config::{BotConfig, SimConfig};
pub use report::{SimReport, SpeciesStats};
pub use runner::{run_simulation, simulate_reel, RunStats};
