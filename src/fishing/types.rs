//! Fishing data structures: species, catch tables, the rod's phases and its
//! tuning.

use crate::constants::{
    BITE_MAX_SECS, BITE_MIN_SECS, DEFAULT_DRIFT_INTENSITY, DEFAULT_PUSH_INTENSITY, DRIFT_PER_KG,
    PUSH_PER_KG,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Something that can end up on the hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSpecies {
    pub name: String,
    pub min_weight_g: f64,
    pub max_weight_g: f64,
    /// Sale price for one gram.
    pub price_per_gram: f64,
}

impl FishSpecies {
    pub fn new(name: &str, min_weight_g: f64, max_weight_g: f64, price_per_gram: f64) -> Self {
        Self {
            name: name.to_string(),
            min_weight_g,
            max_weight_g,
            price_per_gram,
        }
    }
}

/// One row of a [`CatchTable`]. `species: None` is an empty hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchEntry {
    pub species: Option<FishSpecies>,
    /// Relative weight in `[0, 1]`; 0 never bites.
    pub rarity: f64,
}

/// What lives in a body of water.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatchTable {
    pub entries: Vec<CatchEntry>,
}

/// A fish with its rolled weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtFish {
    pub name: String,
    pub weight_g: f64,
    pub price_per_gram: f64,
}

impl CaughtFish {
    pub fn value(&self) -> f64 {
        self.weight_g * self.price_per_gram
    }
}

/// Where the rod is in the cast → bite → reel cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RodPhase {
    /// Rod held, line out of the water.
    Idle,
    /// Line in the water, counting down to a bite.
    Waiting { elapsed: f64, bite_at: f64 },
    /// A fish is biting; the next use starts the reel minigame.
    Hooked,
    /// The reel minigame is running for this catch (`None`: nothing on the
    /// line, but the player still has to reel it in).
    Reeling { catch: Option<CaughtFish> },
}

impl RodPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Waiting { .. } => "Waiting for a bite",
            Self::Hooked => "Fish on the hook!",
            Self::Reeling { .. } => "Reeling",
        }
    }
}

/// What a press of the use key did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RodAction {
    Cast,
    /// Pulled the line out before anything bit.
    ReelIn,
    /// The host must activate the minigame with this difficulty.
    StartReel { drift: f64, push: f64 },
    Ignored,
}

/// Bite timing and catch-weight to difficulty mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RodConfig {
    pub bite_min_secs: f64,
    pub bite_max_secs: f64,
    pub base_drift: f64,
    /// Extra drift intensity per kilogram on the line.
    pub drift_per_kg: f64,
    pub base_push: f64,
    /// Extra push intensity per kilogram on the line.
    pub push_per_kg: f64,
}

impl Default for RodConfig {
    fn default() -> Self {
        Self {
            bite_min_secs: BITE_MIN_SECS,
            bite_max_secs: BITE_MAX_SECS,
            base_drift: DEFAULT_DRIFT_INTENSITY,
            drift_per_kg: DRIFT_PER_KG,
            base_push: DEFAULT_PUSH_INTENSITY,
            push_per_kg: PUSH_PER_KG,
        }
    }
}

impl RodConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("bite_min_secs", self.bite_min_secs),
            ("bite_max_secs", self.bite_max_secs),
            ("base_drift", self.base_drift),
            ("drift_per_kg", self.drift_per_kg),
            ("base_push", self.base_push),
            ("push_per_kg", self.push_per_kg),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in [
            ("base_drift", self.base_drift),
            ("base_push", self.base_push),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("bite_min_secs", self.bite_min_secs),
            ("drift_per_kg", self.drift_per_kg),
            ("push_per_kg", self.push_per_kg),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.bite_min_secs >= self.bite_max_secs {
            return Err(ConfigError::BiteWindowInverted {
                min: self.bite_min_secs,
                max: self.bite_max_secs,
            });
        }
        Ok(())
    }
}
