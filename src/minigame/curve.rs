//! Response curves mapping raw push magnitude to cursor displacement.
//!
//! All curves are evaluated over the unit domain: inputs below `0.0` or
//! above the last key are clamped, so the output is always a value the curve
//! actually reaches.

use serde::{Deserialize, Serialize};

/// A single control point of a [`ResponseCurve::Keyframes`] curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
}

impl Keyframe {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Monotonic ease function applied to each push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "keys", rename_all = "snake_case")]
pub enum ResponseCurve {
    Linear,
    EaseIn,
    EaseOut,
    /// Cubic Hermite between (0,0) and (1,1) with flat tangents.
    #[default]
    EaseInOut,
    /// Piecewise-linear through the given keys, sorted by time.
    Keyframes(Vec<Keyframe>),
}

impl ResponseCurve {
    /// Evaluate the curve at `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::EaseIn => {
                let t = t.clamp(0.0, 1.0);
                t * t
            }
            Self::EaseOut => {
                let t = t.clamp(0.0, 1.0);
                1.0 - (1.0 - t) * (1.0 - t)
            }
            Self::EaseInOut => {
                let t = t.clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }
            Self::Keyframes(keys) => evaluate_keys(keys, t),
        }
    }

    /// Checks that the curve never decreases. Returns a human-readable reason
    /// on failure; built-in curves are always valid.
    pub fn check(&self) -> Result<(), String> {
        let keys = match self {
            Self::Keyframes(keys) => keys,
            _ => return Ok(()),
        };
        if keys.is_empty() {
            return Err("keyframe curve has no keys".to_string());
        }
        for key in keys {
            if !key.time.is_finite() || !key.value.is_finite() {
                return Err(format!(
                    "keyframe ({}, {}) is not finite",
                    key.time, key.value
                ));
            }
        }
        for pair in keys.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(format!(
                    "keyframe times must be strictly increasing ({} then {})",
                    pair[0].time, pair[1].time
                ));
            }
            if pair[1].value < pair[0].value {
                return Err(format!(
                    "keyframe values must not decrease ({} then {})",
                    pair[0].value, pair[1].value
                ));
            }
        }
        Ok(())
    }
}

fn evaluate_keys(keys: &[Keyframe], t: f64) -> f64 {
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }
    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            let frac = (t - a.time) / span;
            return a.value + (b.value - a.value) * frac;
        }
    }
    last.value
}
