//! Reel minigame data structures.
//!
//! A one-dimensional cursor drifts toward the left failure boundary; the
//! player counters with discrete pushes while progress fills toward a catch.
//! Positions run from `0.0` (right edge) to `1.0` (left edge).

use crate::constants::START_POSITION;
use serde::{Deserialize, Serialize};

/// Mutable state of one run from activation to outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinigameSession {
    /// Rendered cursor position, lagging `target_position` through the filter.
    pub current_position: f64,
    /// Logical position that drift and pushes act on.
    pub target_position: f64,
    /// Smoothing filter state, carried between ticks.
    pub velocity: f64,
    pub progress: f64,
    pub drift_intensity: f64,
    pub push_intensity: f64,
    pub active: bool,
    /// Pushes applied during this session.
    pub pushes: u32,
    /// Simulated seconds elapsed while active.
    pub elapsed: f64,
}

impl Default for MinigameSession {
    fn default() -> Self {
        Self {
            current_position: START_POSITION,
            target_position: START_POSITION,
            velocity: 0.0,
            progress: 0.0,
            drift_intensity: 0.0,
            push_intensity: 0.0,
            active: false,
            pushes: 0,
            elapsed: 0.0,
        }
    }
}

impl MinigameSession {
    /// Fresh, live session with the given difficulty.
    pub fn started(drift_intensity: f64, push_intensity: f64) -> Self {
        Self {
            drift_intensity,
            push_intensity,
            active: true,
            ..Default::default()
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinigameOutcome {
    Success,
    Fail,
}

/// Outbound notification, queued on the controller until drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinigameEvent {
    Started,
    Succeeded,
    Failed,
}

impl From<MinigameOutcome> for MinigameEvent {
    fn from(outcome: MinigameOutcome) -> Self {
        match outcome {
            MinigameOutcome::Success => Self::Succeeded,
            MinigameOutcome::Fail => Self::Failed,
        }
    }
}

/// Receiver for minigame notifications. Every hook defaults to a no-op so
/// callers only implement what they care about.
pub trait MinigameListener {
    fn on_start(&mut self) {}
    fn on_success(&mut self) {}
    fn on_fail(&mut self) {}
}
