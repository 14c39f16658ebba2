//! Coin Tap: an idle gold economy with unlockable, upgradable resources.

pub mod achievements;
pub mod config;
pub mod logic;
pub mod simulator;
pub mod state;

use crate::time::CollectTimer;

use achievements::{AchievementNotifier, AchievementTracker};
use config::GameConfig;
use state::{EconomyState, Resource};

/// One play session: state, achievement collaborator and the collect timer.
///
/// The host loop feeds frame deltas to `update()` and forwards player
/// actions to `collect_by_tap()`, `unlock()`, `upgrade()` and
/// `buy_shop_item()`.
pub struct Economy<N: AchievementNotifier = AchievementTracker> {
    pub state: EconomyState,
    notifier: N,
    timer: CollectTimer,
}

impl Economy<AchievementTracker> {
    /// Session with the achievements listed in the config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config, AchievementTracker::new(&config.achievements))
    }
}

impl<N: AchievementNotifier> Economy<N> {
    pub fn new(config: &GameConfig, notifier: N) -> Self {
        Self {
            state: EconomyState::new(config),
            notifier,
            timer: CollectTimer::per_second(),
        }
    }

    /// Advance by one frame. Returns the passive income if a second elapsed.
    pub fn update(&mut self, delta_seconds: f64) -> Option<f64> {
        if self.timer.advance(delta_seconds) {
            Some(self.tick_second())
        } else {
            None
        }
    }

    pub fn tick_second(&mut self) -> f64 {
        logic::tick_second(&mut self.state, &mut self.notifier)
    }

    pub fn collect_by_tap(&mut self) -> f64 {
        logic::collect_by_tap(&mut self.state, &mut self.notifier)
    }

    pub fn add_gold(&mut self, delta: f64) {
        logic::add_gold(&mut self.state, &mut self.notifier, delta);
    }

    pub fn upgrade(&mut self, index: usize) -> bool {
        logic::upgrade(&mut self.state, &mut self.notifier, index)
    }

    pub fn unlock(&mut self, index: usize) -> bool {
        logic::unlock(&mut self.state, &mut self.notifier, index)
    }

    /// Unlock if locked, upgrade otherwise (what the resource button does).
    pub fn press_resource(&mut self, index: usize) -> bool {
        match self.state.resources.get(index) {
            Some(r) if r.is_unlocked() => self.upgrade(index),
            Some(_) => self.unlock(index),
            None => false,
        }
    }

    pub fn reveal_next(&mut self) -> Option<usize> {
        logic::reveal_next(&mut self.state)
    }

    pub fn buyable_check(&self, index: usize) -> bool {
        logic::buyable_check(&self.state, index)
    }

    pub fn buyable_flags(&self) -> Vec<bool> {
        logic::buyable_flags(&self.state)
    }

    pub fn buy_shop_item(&mut self, index: usize) -> bool {
        logic::buy_shop_item(&mut self.state, &mut self.notifier, index)
    }

    pub fn total_gold(&self) -> f64 {
        self.state.total_gold
    }

    pub fn resources(&self) -> &[Resource] {
        &self.state.resources
    }

    pub fn auto_collect_per_second(&self) -> f64 {
        self.state.auto_collect_per_second()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
