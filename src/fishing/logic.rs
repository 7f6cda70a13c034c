//! Fishing rod: cast, wait for a bite, hand the catch to the reel minigame
//! and settle the outcome.

use super::bag::CatchBag;
use super::generation::{difficulty_for_weight, roll_bite_secs};
use super::types::{CatchTable, CaughtFish, RodAction, RodConfig, RodPhase};
use crate::error::ConfigError;
use rand::Rng;

/// Caller side of the reel minigame.
///
/// The rod decides *what* is being reeled and how hard it fights; the
/// minigame decides whether the player lands it. The rod never steps the
/// minigame itself. [`use_rod`](Self::use_rod) returns
/// [`RodAction::StartReel`] and the owner activates the minigame, then
/// reports back through [`land_catch`](Self::land_catch) or
/// [`lose_catch`](Self::lose_catch).
#[derive(Debug, Clone)]
pub struct FishingRod {
    config: RodConfig,
    phase: RodPhase,
    fishing: bool,
}

impl FishingRod {
    pub fn new(config: RodConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: RodPhase::Idle,
            fishing: false,
        })
    }

    pub fn config(&self) -> &RodConfig {
        &self.config
    }

    pub fn phase(&self) -> &RodPhase {
        &self.phase
    }

    /// True from a successful cast until the line is out of the water again.
    pub fn is_fishing(&self) -> bool {
        self.fishing
    }

    /// The catch currently being reeled in, if any.
    pub fn line_catch(&self) -> Option<&CaughtFish> {
        match &self.phase {
            RodPhase::Reeling { catch } => catch.as_ref(),
            _ => None,
        }
    }

    /// Seconds left before the bite while waiting.
    pub fn bite_remaining(&self) -> Option<f64> {
        match self.phase {
            RodPhase::Waiting { elapsed, bite_at } => Some((bite_at - elapsed).max(0.0)),
            _ => None,
        }
    }

    fn set_fishing(&mut self, fishing: bool) {
        self.fishing = fishing;
        log::debug!("Fishing state changed: {}", fishing);
    }

    /// Handle one press of the use key.
    pub fn use_rod(&mut self, table: &CatchTable, rng: &mut impl Rng) -> RodAction {
        match self.phase {
            RodPhase::Idle => {
                let bite_at = roll_bite_secs(&self.config, rng);
                self.phase = RodPhase::Waiting {
                    elapsed: 0.0,
                    bite_at,
                };
                self.set_fishing(true);
                log::info!("Line cast. Waiting for a bite...");
                RodAction::Cast
            }
            RodPhase::Waiting { .. } => {
                self.phase = RodPhase::Idle;
                self.set_fishing(false);
                log::info!("Stopped fishing.");
                RodAction::ReelIn
            }
            RodPhase::Hooked => {
                let catch = table.roll(rng);
                let weight_g = catch.as_ref().map_or(0.0, |fish| fish.weight_g);
                let (drift, push) = difficulty_for_weight(&self.config, weight_g);
                self.phase = RodPhase::Reeling { catch };
                RodAction::StartReel { drift, push }
            }
            RodPhase::Reeling { .. } => RodAction::Ignored,
        }
    }

    /// Advance the bite timer. Returns true on the tick the fish bites.
    pub fn tick(&mut self, dt: f64) -> bool {
        if let RodPhase::Waiting { elapsed, bite_at } = &mut self.phase {
            *elapsed += dt.max(0.0);
            if *elapsed >= *bite_at {
                self.phase = RodPhase::Hooked;
                log::info!("A fish is on the hook! Press use to start reeling.");
                return true;
            }
        }
        false
    }

    /// The reel succeeded: store the catch (if any) and reset.
    pub fn land_catch(&mut self, bag: &mut CatchBag) -> Option<CaughtFish> {
        let catch = match std::mem::replace(&mut self.phase, RodPhase::Idle) {
            RodPhase::Reeling { catch } => catch,
            _ => None,
        };
        match &catch {
            Some(fish) => {
                bag.add_as_new_instance(fish.clone());
                log::info!("You caught: {} ({:.0}g)", fish.name, fish.weight_g);
            }
            None => log::info!("You caught: Nothing"),
        }
        self.cleanup();
        catch
    }

    /// The reel failed: the catch escapes and the rod resets.
    pub fn lose_catch(&mut self) -> Option<CaughtFish> {
        let lost = match std::mem::replace(&mut self.phase, RodPhase::Idle) {
            RodPhase::Reeling { catch } => catch,
            _ => None,
        };
        log::info!("The fish got away!");
        self.cleanup();
        lost
    }

    /// Put the rod away mid-session.
    pub fn stow(&mut self) {
        self.phase = RodPhase::Idle;
        self.cleanup();
    }

    fn cleanup(&mut self) {
        self.phase = RodPhase::Idle;
        if self.fishing {
            self.set_fishing(false);
        }
    }
}
