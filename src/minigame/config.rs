//! Reel minigame tuning and its validation.

use super::curve::ResponseCurve;
use crate::constants::{
    DRIFT_SCALE, LEFT_BOUND, MAX_PROGRESS, PROGRESS_PER_CLICK, PROGRESS_PER_SECOND, PUSH_SCALE,
    RIGHT_BOUND, SMOOTH_TIME_SECS,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tuning shared by every session of a [`ReelMinigame`](super::ReelMinigame).
///
/// Per-session difficulty (drift/push intensity) is supplied at activation;
/// everything here is fixed for the lifetime of the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinigameConfig {
    /// Multiplier from drift intensity to target displacement per second.
    pub drift_scale: f64,
    /// Multiplier from push intensity to raw curve input.
    pub push_scale: f64,
    /// Smoothing time constant of the cursor filter, in seconds.
    pub smooth_time: f64,
    pub progress_per_second: f64,
    pub progress_per_click: f64,
    pub max_progress: f64,
    /// Failure threshold on the low side (cursor pushed too far right).
    pub left_bound: f64,
    /// Failure threshold on the high side (cursor drifted too far left).
    pub right_bound: f64,
    pub response_curve: ResponseCurve,
}

impl Default for MinigameConfig {
    fn default() -> Self {
        Self {
            drift_scale: DRIFT_SCALE,
            push_scale: PUSH_SCALE,
            smooth_time: SMOOTH_TIME_SECS,
            progress_per_second: PROGRESS_PER_SECOND,
            progress_per_click: PROGRESS_PER_CLICK,
            max_progress: MAX_PROGRESS,
            left_bound: LEFT_BOUND,
            right_bound: RIGHT_BOUND,
            response_curve: ResponseCurve::default(),
        }
    }
}

impl MinigameConfig {
    /// Reject configurations the simulation can't run sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("drift_scale", self.drift_scale),
            ("push_scale", self.push_scale),
            ("smooth_time", self.smooth_time),
            ("progress_per_second", self.progress_per_second),
            ("progress_per_click", self.progress_per_click),
            ("max_progress", self.max_progress),
            ("left_bound", self.left_bound),
            ("right_bound", self.right_bound),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("drift_scale", self.drift_scale),
            ("push_scale", self.push_scale),
            ("smooth_time", self.smooth_time),
            ("max_progress", self.max_progress),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("progress_per_second", self.progress_per_second),
            ("progress_per_click", self.progress_per_click),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("left_bound", self.left_bound),
            ("right_bound", self.right_bound),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::BoundOutOfRange { field, value });
            }
        }

        if self.left_bound >= self.right_bound {
            return Err(ConfigError::BoundsInverted {
                left: self.left_bound,
                right: self.right_bound,
            });
        }

        self.response_curve
            .check()
            .map_err(ConfigError::InvalidCurve)
    }

    /// Width of the safe zone between the two bounds.
    pub fn safe_width(&self) -> f64 {
        self.right_bound - self.left_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minigame::curve::Keyframe;

    #[test]
    fn test_default_is_valid() {
        let config = MinigameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.safe_width() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = MinigameConfig {
            left_bound: 0.7,
            right_bound: 0.3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundsInverted {
                left: 0.7,
                right: 0.3
            })
        );
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let config = MinigameConfig {
            left_bound: 0.5,
            right_bound: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoundsInverted { .. })
        ));
    }

    #[test]
    fn test_bound_outside_unit_interval_rejected() {
        let config = MinigameConfig {
            right_bound: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundOutOfRange {
                field: "right_bound",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_non_positive_max_progress_rejected() {
        let config = MinigameConfig {
            max_progress: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "max_progress",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let config = MinigameConfig {
            smooth_time: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "smooth_time",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_click_progress_rejected() {
        let config = MinigameConfig {
            progress_per_click: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_bad_curve_rejected() {
        let config = MinigameConfig {
            response_curve: ResponseCurve::Keyframes(vec![
                Keyframe::new(0.0, 1.0),
                Keyframe::new(1.0, 0.0),
            ]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("invalid response curve"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: MinigameConfig =
            serde_json::from_str(r#"{"left_bound": 0.2, "max_progress": 50.0}"#).unwrap();
        assert_eq!(config.left_bound, 0.2);
        assert_eq!(config.max_progress, 50.0);
        assert_eq!(config.right_bound, RIGHT_BOUND);
        assert_eq!(config.response_curve, ResponseCurve::EaseInOut);
    }
}
