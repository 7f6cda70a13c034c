//! Catch bag: every landed fish is stored as its own instance with the
//! weight it was caught at.

use super::types::CaughtFish;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatchBag {
    items: Vec<CaughtFish>,
}

impl CatchBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `fish` as a new entry (never merged into an existing stack).
    pub fn add_as_new_instance(&mut self, fish: CaughtFish) -> &CaughtFish {
        self.items.push(fish);
        &self.items[self.items.len() - 1]
    }

    pub fn items(&self) -> &[CaughtFish] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight_g(&self) -> f64 {
        self.items.iter().map(|f| f.weight_g).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.items.iter().map(CaughtFish::value).sum()
    }

    /// Heaviest fish in the bag.
    pub fn best_catch(&self) -> Option<&CaughtFish> {
        self.items
            .iter()
            .max_by(|a, b| a.weight_g.total_cmp(&b.weight_g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fish(name: &str, weight_g: f64, price: f64) -> CaughtFish {
        CaughtFish {
            name: name.to_string(),
            weight_g,
            price_per_gram: price,
        }
    }

    #[test]
    fn test_empty_bag() {
        let bag = CatchBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.total_weight_g(), 0.0);
        assert_eq!(bag.best_catch(), None);
    }

    #[test]
    fn test_same_species_kept_as_separate_instances() {
        let mut bag = CatchBag::new();
        bag.add_as_new_instance(fish("Perch", 120.0, 0.4));
        let added = bag.add_as_new_instance(fish("Perch", 300.0, 0.4));
        assert_eq!(added.weight_g, 300.0);
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.items()[0].weight_g, 120.0);
    }

    #[test]
    fn test_totals_and_best_catch() {
        let mut bag = CatchBag::new();
        bag.add_as_new_instance(fish("Minnow", 20.0, 0.5));
        bag.add_as_new_instance(fish("Pike", 2000.0, 0.4));
        assert!((bag.total_weight_g() - 2020.0).abs() < 1e-9);
        assert!((bag.total_value() - 810.0).abs() < 1e-9);
        assert_eq!(bag.best_catch().unwrap().name, "Pike");
    }
}
