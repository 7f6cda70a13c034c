//! Catch rolling, bite timing and difficulty derivation.

use super::types::{CatchEntry, CatchTable, CaughtFish, FishSpecies, RodConfig};
use rand::Rng;

/// Default pond stock: (name, min g, max g, price per gram, rarity).
const DEFAULT_STOCK: [(&str, f64, f64, f64, f64); 8] = [
    ("Minnow", 5.0, 40.0, 0.5, 0.9),
    ("Perch", 50.0, 400.0, 0.4, 0.7),
    ("Carp", 300.0, 1500.0, 0.2, 0.6),
    ("Trout", 200.0, 1200.0, 0.6, 0.5),
    ("Bass", 400.0, 2500.0, 0.5, 0.35),
    ("Pike", 800.0, 4000.0, 0.4, 0.2),
    ("Salmon", 1500.0, 6000.0, 0.8, 0.1),
    ("Sturgeon", 4000.0, 12000.0, 1.0, 0.03),
];

/// Chance weight of pulling up nothing at all.
const EMPTY_HOOK_RARITY: f64 = 0.1;

/// Catch table used when the settings don't provide one.
pub fn default_catch_table() -> CatchTable {
    let mut entries: Vec<CatchEntry> = DEFAULT_STOCK
        .iter()
        .map(|&(name, min, max, price, rarity)| CatchEntry {
            species: Some(FishSpecies::new(name, min, max, price)),
            rarity,
        })
        .collect();
    entries.push(CatchEntry {
        species: None,
        rarity: EMPTY_HOOK_RARITY,
    });
    CatchTable { entries }
}

impl CatchTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn total_rarity(&self) -> f64 {
        self.entries.iter().map(|e| e.rarity.max(0.0)).sum()
    }

    /// Picks an entry weighted by rarity and rolls its weight.
    ///
    /// Returns `None` for an empty table, a table whose rarities sum to
    /// zero, or when the empty-hook entry comes up.
    pub fn roll(&self, rng: &mut impl Rng) -> Option<CaughtFish> {
        let total = self.total_rarity();
        if self.entries.is_empty() || total <= 0.0 {
            return None;
        }

        let roll = rng.gen::<f64>() * total;
        let mut accum = 0.0;
        let picked = self
            .entries
            .iter()
            .find(|entry| {
                accum += entry.rarity.max(0.0);
                entry.rarity > 0.0 && roll <= accum
            })
            // Float rounding can leave the roll just past the last sum
            .or_else(|| self.entries.last())?;

        picked
            .species
            .as_ref()
            .map(|species| roll_fish(species, rng))
    }
}

/// Rolls a specimen of `species` with a uniform weight in its range.
pub fn roll_fish(species: &FishSpecies, rng: &mut impl Rng) -> CaughtFish {
    let weight_g = if species.max_weight_g > species.min_weight_g {
        rng.gen_range(species.min_weight_g..species.max_weight_g)
    } else {
        species.min_weight_g
    };
    CaughtFish {
        name: species.name.clone(),
        weight_g,
        price_per_gram: species.price_per_gram,
    }
}

/// Seconds until the next bite, uniform in the configured window.
pub fn roll_bite_secs(config: &RodConfig, rng: &mut impl Rng) -> f64 {
    if config.bite_max_secs > config.bite_min_secs {
        rng.gen_range(config.bite_min_secs..config.bite_max_secs)
    } else {
        config.bite_min_secs
    }
}

/// Heavier catches drift harder but also respond more to each push.
/// Returns `(drift_intensity, push_intensity)`.
pub fn difficulty_for_weight(config: &RodConfig, weight_g: f64) -> (f64, f64) {
    let kg = weight_g.max(0.0) / 1000.0;
    (
        config.base_drift + kg * config.drift_per_kg,
        config.base_push + kg * config.push_per_kg,
    )
}
