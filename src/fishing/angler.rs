//! The angler ties the rod, the reel minigame and the bag together behind a
//! single use key and a per-frame tick.

use super::bag::CatchBag;
use super::logic::FishingRod;
use super::types::{CatchTable, RodAction, RodConfig};
use crate::error::ConfigError;
use crate::minigame::{MinigameConfig, MinigameListener, MinigameOutcome, ReelMinigame};
use rand::Rng;

/// What the use key ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryAction {
    /// Pushed the reel cursor.
    Push,
    Rod(RodAction),
}

/// Routes minigame notifications to the rod and bag without handing out
/// the whole angler.
struct ReelHandler<'a> {
    rod: &'a mut FishingRod,
    bag: &'a mut CatchBag,
}

impl MinigameListener for ReelHandler<'_> {
    fn on_start(&mut self) {
        log::debug!("Entered reel minigame");
    }

    fn on_success(&mut self) {
        self.rod.land_catch(self.bag);
    }

    fn on_fail(&mut self) {
        self.rod.lose_catch();
    }
}

/// Sole owner of one reel minigame; every mutation goes through here.
pub struct Angler<R: Rng> {
    rod: FishingRod,
    minigame: ReelMinigame,
    bag: CatchBag,
    water: CatchTable,
    rng: R,
}

impl<R: Rng> Angler<R> {
    pub fn new(
        minigame_config: MinigameConfig,
        rod_config: RodConfig,
        water: CatchTable,
        rng: R,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            rod: FishingRod::new(rod_config)?,
            minigame: ReelMinigame::new(minigame_config)?,
            bag: CatchBag::new(),
            water,
            rng,
        })
    }

    /// Replace the (empty) starting bag, e.g. with one loaded from disk.
    pub fn with_bag(mut self, bag: CatchBag) -> Self {
        self.bag = bag;
        self
    }

    pub fn rod(&self) -> &FishingRod {
        &self.rod
    }

    pub fn minigame(&self) -> &ReelMinigame {
        &self.minigame
    }

    pub fn bag(&self) -> &CatchBag {
        &self.bag
    }

    pub fn water(&self) -> &CatchTable {
        &self.water
    }

    /// The one input: push while reeling, otherwise use the rod.
    pub fn primary_action(&mut self) -> PrimaryAction {
        if self.minigame.push() {
            return PrimaryAction::Push;
        }

        let action = self.rod.use_rod(&self.water, &mut self.rng);
        if let RodAction::StartReel { drift, push } = action {
            self.minigame.configure(drift, push);
            self.minigame.start();
            self.dispatch();
        }
        PrimaryAction::Rod(action)
    }

    /// Start a reel without a cast, at the rod's base difficulty.
    pub fn start_practice_reel(&mut self) {
        let config = self.rod.config();
        self.minigame.configure(config.base_drift, config.base_push);
        self.minigame.start();
        self.dispatch();
    }

    /// Advance the world by `dt` seconds. Returns the reel outcome if one
    /// was decided this frame.
    pub fn tick(&mut self, dt: f64) -> Option<MinigameOutcome> {
        self.rod.tick(dt);
        let outcome = self.minigame.tick(dt);
        self.dispatch();
        outcome
    }

    /// Abandon whatever is in progress.
    pub fn stow(&mut self) {
        self.minigame.cancel();
        self.minigame.take_events();
        self.rod.stow();
    }

    fn dispatch(&mut self) {
        let mut handler = ReelHandler {
            rod: &mut self.rod,
            bag: &mut self.bag,
        };
        self.minigame.dispatch_events(&mut handler);
    }

    pub fn into_bag(self) -> CatchBag {
        self.bag
    }
}
