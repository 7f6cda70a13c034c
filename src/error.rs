//! Configuration errors shared by the minigame and the rod.

use std::fmt;

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    NotFinite { field: &'static str, value: f64 },
    /// A field that must be strictly positive isn't.
    NotPositive { field: &'static str, value: f64 },
    /// A field that must be non-negative isn't.
    Negative { field: &'static str, value: f64 },
    /// A bound lies outside the unit interval.
    BoundOutOfRange { field: &'static str, value: f64 },
    /// `left_bound` is not strictly below `right_bound`.
    BoundsInverted { left: f64, right: f64 },
    /// The response curve is empty, unsorted, or decreasing.
    InvalidCurve(String),
    /// The bite timer window is empty.
    BiteWindowInverted { min: f64, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field, value } => write!(f, "{} must be finite, got {}", field, value),
            Self::NotPositive { field, value } => {
                write!(f, "{} must be greater than zero, got {}", field, value)
            }
            Self::Negative { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            Self::BoundOutOfRange { field, value } => {
                write!(f, "{} must lie in [0, 1], got {}", field, value)
            }
            Self::BoundsInverted { left, right } => write!(
                f,
                "left_bound ({}) must be below right_bound ({})",
                left, right
            ),
            Self::InvalidCurve(reason) => write!(f, "invalid response curve: {}", reason),
            Self::BiteWindowInverted { min, max } => write!(
                f,
                "bite_min_secs ({}) must be below bite_max_secs ({})",
                min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = ConfigError::NotPositive {
            field: "smooth_time",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "smooth_time must be greater than zero, got -1");
    }

    #[test]
    fn test_converts_to_invalid_data_io_error() {
        let err: std::io::Error = ConfigError::BoundsInverted {
            left: 0.6,
            right: 0.4,
        }
        .into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("left_bound"));
    }
}
