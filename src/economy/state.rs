//! Economy state definitions.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::logic::format_number;

/// Static definition of a resource generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub name: String,
    /// One-time cost to unlock. Zero means unlocked from the start.
    pub unlock_cost: f64,
    /// Upgrade cost per level.
    pub upgrade_cost: f64,
    /// Gold produced per level.
    pub output: f64,
}

/// Static definition of a cosmetic shop entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub name: String,
    pub cost: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// A single generator's runtime state.
#[derive(Clone, Debug)]
pub struct Resource {
    config: ResourceConfig,
    level: u32,
    unlocked: bool,
    /// Shown to the player. Gates unlock order.
    visible: bool,
}

impl Resource {
    pub fn new(config: ResourceConfig) -> Self {
        let mut resource = Self {
            config: config.clone(),
            level: 1,
            unlocked: false,
            visible: false,
        };
        resource.set_config(config);
        resource
    }

    /// Bind static data and reset progress. A free resource starts unlocked.
    pub fn set_config(&mut self, config: ResourceConfig) {
        self.unlocked = config.unlock_cost == 0.0;
        self.level = 1;
        self.config = config;
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Gold per tap at the current level.
    pub fn output(&self) -> f64 {
        self.config.output * self.level as f64
    }

    /// Cost of the next level.
    pub fn upgrade_cost(&self) -> f64 {
        self.config.upgrade_cost * self.level as f64
    }

    pub fn unlock_cost(&self) -> f64 {
        self.config.unlock_cost
    }

    /// Cost of whatever the resource button would buy right now.
    pub fn next_cost(&self) -> f64 {
        if self.unlocked {
            self.upgrade_cost()
        } else {
            self.unlock_cost()
        }
    }

    /// Description line, e.g. "Copper Mine Lv.2\n+2".
    pub fn label(&self) -> String {
        format!(
            "{} Lv.{}\n+{}",
            self.config.name,
            self.level,
            format_number(self.output().round())
        )
    }

    /// "Unlock Cost\n50"
    pub fn unlock_cost_label(&self) -> String {
        format!("Unlock Cost\n{}", format_number(self.unlock_cost()))
    }

    /// "Upgrade Cost\n10"
    pub fn upgrade_cost_label(&self) -> String {
        format!("Upgrade Cost\n{}", format_number(self.upgrade_cost()))
    }

    pub(crate) fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    pub(crate) fn mark_unlocked(&mut self) {
        self.unlocked = true;
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }
}

/// A shop item plus whether the player owns it.
#[derive(Clone, Debug)]
pub struct ShopEntry {
    pub item: ShopItem,
    pub purchased: bool,
}

/// Session statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EconomyStats {
    pub total_taps: u64,
    pub passive_ticks: u64,
    pub gold_earned: f64,
    pub gold_spent: f64,
}

/// Full state of one play session.
pub struct EconomyState {
    /// Player's gold. Single source of truth for affordability.
    pub total_gold: f64,
    /// Share of total output collected passively each second.
    pub auto_collect_fraction: f64,
    /// Generators in unlock-progression order.
    pub resources: Vec<Resource>,
    pub shop: Vec<ShopEntry>,
    pub stats: EconomyStats,
}

impl EconomyState {
    pub fn new(config: &GameConfig) -> Self {
        let mut resources: Vec<Resource> = config
            .resources
            .iter()
            .cloned()
            .map(Resource::new)
            .collect();

        // Show everything up to and including the first locked resource.
        for resource in &mut resources {
            resource.show();
            if !resource.is_unlocked() {
                break;
            }
        }

        let shop = config
            .shop_items
            .iter()
            .map(|item| ShopEntry {
                item: item.clone(),
                purchased: false,
            })
            .collect();

        Self {
            total_gold: 0.0,
            auto_collect_fraction: config.auto_collect_fraction,
            resources,
            shop,
            stats: EconomyStats::default(),
        }
    }

    /// Combined output of all unlocked resources.
    pub fn unlocked_output(&self) -> f64 {
        self.resources
            .iter()
            .filter(|r| r.is_unlocked())
            .map(|r| r.output())
            .sum()
    }

    /// Gold one passive tick would add.
    pub fn auto_collect_per_second(&self) -> f64 {
        self.unlocked_output() * self.auto_collect_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, unlock: f64, upgrade: f64, output: f64) -> ResourceConfig {
        ResourceConfig {
            name: name.into(),
            unlock_cost: unlock,
            upgrade_cost: upgrade,
            output,
        }
    }

    #[test]
    fn free_resource_starts_unlocked() {
        let r = Resource::new(config("Copper", 0.0, 5.0, 1.0));
        assert!(r.is_unlocked());
        assert_eq!(r.level(), 1);
    }

    #[test]
    fn priced_resource_starts_locked() {
        let r = Resource::new(config("Silver", 50.0, 10.0, 5.0));
        assert!(!r.is_unlocked());
        assert!((r.unlock_cost() - 50.0).abs() < 0.001);
        assert!((r.next_cost() - 50.0).abs() < 0.001);
    }

    #[test]
    fn output_and_cost_scale_with_level() {
        let mut r = Resource::new(config("Copper", 0.0, 5.0, 1.5));
        r.level_up();
        r.level_up();
        assert_eq!(r.level(), 3);
        assert!((r.output() - 4.5).abs() < 0.001);
        assert!((r.upgrade_cost() - 15.0).abs() < 0.001);
        assert!((r.next_cost() - 15.0).abs() < 0.001);
    }

    #[test]
    fn set_config_resets_level() {
        let mut r = Resource::new(config("Copper", 0.0, 5.0, 1.0));
        r.level_up();
        r.set_config(config("Silver", 50.0, 10.0, 5.0));
        assert_eq!(r.level(), 1);
        assert!(!r.is_unlocked());
        assert_eq!(r.name(), "Silver");
    }

    #[test]
    fn label_shows_level_and_output() {
        let mut r = Resource::new(config("Copper Mine", 0.0, 5.0, 1.0));
        r.level_up();
        assert_eq!(r.label(), "Copper Mine Lv.2\n+2");
    }

    #[test]
    fn cost_labels_follow_level() {
        let mut r = Resource::new(config("Silver Mine", 1_500.0, 10.0, 5.0));
        assert_eq!(r.unlock_cost_label(), "Unlock Cost\n1,500");
        assert_eq!(r.upgrade_cost_label(), "Upgrade Cost\n10");
        r.level_up();
        assert_eq!(r.upgrade_cost_label(), "Upgrade Cost\n20");
    }

    #[test]
    fn level_saturates_instead_of_overflowing() {
        let mut r = Resource::new(config("Free", 0.0, 0.0, 1.0));
        r.level = u32::MAX - 1;
        r.level_up();
        r.level_up();
        assert_eq!(r.level(), u32::MAX);
    }

    #[test]
    fn initial_visibility_stops_at_first_locked() {
        let cfg = GameConfig {
            auto_collect_fraction: 0.1,
            resources: vec![
                config("A", 0.0, 5.0, 1.0),
                config("B", 0.0, 5.0, 1.0),
                config("C", 50.0, 10.0, 5.0),
                config("D", 500.0, 50.0, 20.0),
            ],
            shop_items: Vec::new(),
            achievements: Vec::new(),
        };
        let state = EconomyState::new(&cfg);
        let visible: Vec<bool> = state.resources.iter().map(|r| r.is_visible()).collect();
        assert_eq!(visible, vec![true, true, true, false]);
    }

    #[test]
    fn unlocked_output_skips_locked() {
        let cfg = GameConfig {
            auto_collect_fraction: 0.5,
            resources: vec![config("A", 0.0, 5.0, 2.0), config("B", 50.0, 10.0, 5.0)],
            shop_items: Vec::new(),
            achievements: Vec::new(),
        };
        let state = EconomyState::new(&cfg);
        assert!((state.unlocked_output() - 2.0).abs() < 0.001);
        assert!((state.auto_collect_per_second() - 1.0).abs() < 0.001);
    }
}
