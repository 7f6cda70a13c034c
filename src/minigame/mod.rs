//! Reel minigame: types, tuning, smoothing and the controller.

pub mod config;
pub mod curve;
pub mod logic;
pub mod smoothing;
pub mod types;

pub use config::MinigameConfig;
pub use curve::{Keyframe, ResponseCurve};
pub use logic::ReelMinigame;
pub use smoothing::smooth_damp;
pub use types::{MinigameEvent, MinigameListener, MinigameOutcome, MinigameSession};
