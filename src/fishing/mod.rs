//! Fishing: catch tables, the rod that calls the reel minigame, the bag
//! that keeps what was landed, and the angler that owns them all.

pub mod angler;
pub mod bag;
pub mod generation;
pub mod logic;
pub mod types;

pub use angler::{Angler, PrimaryAction};
pub use bag::CatchBag;
pub use generation::{default_catch_table, difficulty_for_weight, roll_bite_secs, roll_fish};
pub use logic::FishingRod;
pub use types::{
    CatchEntry, CatchTable, CaughtFish, FishSpecies, RodAction, RodConfig, RodPhase,
};
