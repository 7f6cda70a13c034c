//! Reel - fishing reel minigame core with a terminal host
//!
//! The library exposes the minigame controller, the fishing rod that feeds
//! it, settings persistence and the balance simulator.

pub mod build_info;
pub mod constants;
pub mod error;
pub mod fishing;
pub mod logger;
pub mod minigame;
pub mod settings;
pub mod simulator;
pub mod ui;

pub use error::ConfigError;
pub use fishing::{Angler, CatchBag, CatchTable, FishingRod, PrimaryAction, RodConfig};
pub use minigame::{
    MinigameConfig, MinigameEvent, MinigameListener, MinigameOutcome, ReelMinigame,
};
pub use settings::{Settings, SettingsManager};
