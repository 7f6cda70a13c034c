// Reel minigame tuning defaults
pub const DRIFT_SCALE: f64 = 0.1;
pub const PUSH_SCALE: f64 = 0.1;
pub const SMOOTH_TIME_SECS: f64 = 0.3;
pub const PROGRESS_PER_SECOND: f64 = 10.0;
pub const PROGRESS_PER_CLICK: f64 = 20.0;
pub const MAX_PROGRESS: f64 = 100.0;
pub const LEFT_BOUND: f64 = 0.3;
pub const RIGHT_BOUND: f64 = 0.7;

/// Cursor rest position at activation (0 = right edge, 1 = left edge).
pub const START_POSITION: f64 = 0.5;

// Difficulty used when nothing is on the line
pub const DEFAULT_DRIFT_INTENSITY: f64 = 1.2;
pub const DEFAULT_PUSH_INTENSITY: f64 = 0.5;

// Rod: bite timer window and weight-to-difficulty coefficients (per kilogram)
pub const BITE_MIN_SECS: f64 = 2.0;
pub const BITE_MAX_SECS: f64 = 5.0;
pub const DRIFT_PER_KG: f64 = 2.0;
pub const PUSH_PER_KG: f64 = 3.0;

// Terminal host
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const LOG_BUFFER_CAPACITY: usize = 12;
/// Largest dt fed to the simulation in one frame, so a stalled terminal
/// doesn't end a session in a single step.
pub const MAX_FRAME_DT_SECS: f64 = 0.1;
