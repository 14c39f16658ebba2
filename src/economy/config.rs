//! Game configuration: resources, shop items and achievements.
//!
//! Loaded once at startup from JSON and validated before the economy is
//! built. Everything downstream assumes a validated config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::achievements::{AchievementConfig, AchievementKind};
use super::state::{ResourceConfig, ShopItem};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("auto_collect_fraction must be within [0, 1], got {0}")]
    AutoCollectFraction(f64),
    #[error("at least one resource must be configured")]
    NoResources,
    #[error("{owner}: {field} must be a finite non-negative number, got {value}")]
    InvalidCost {
        owner: String,
        field: &'static str,
        value: f64,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_auto_collect_fraction")]
    pub auto_collect_fraction: f64,
    pub resources: Vec<ResourceConfig>,
    #[serde(default)]
    pub shop_items: Vec<ShopItem>,
    #[serde(default)]
    pub achievements: Vec<AchievementConfig>,
}

fn default_auto_collect_fraction() -> f64 {
    0.1
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = self.auto_collect_fraction;
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ConfigError::AutoCollectFraction(fraction));
        }
        if self.resources.is_empty() {
            return Err(ConfigError::NoResources);
        }
        for r in &self.resources {
            check_cost(&r.name, "unlock_cost", r.unlock_cost)?;
            check_cost(&r.name, "upgrade_cost", r.upgrade_cost)?;
            check_cost(&r.name, "output", r.output)?;
        }
        for item in &self.shop_items {
            check_cost(&item.name, "cost", item.cost)?;
        }
        for a in &self.achievements {
            if let AchievementKind::GoldReach(threshold) = a.kind {
                check_cost(&a.title, "threshold", threshold)?;
            }
        }
        Ok(())
    }
}

fn check_cost(owner: &str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCost {
            owner: owner.to_string(),
            field,
            value,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let resource = |name: &str, unlock_cost: f64, upgrade_cost: f64, output: f64| {
            ResourceConfig {
                name: name.into(),
                unlock_cost,
                upgrade_cost,
                output,
            }
        };
        let item = |name: &str, cost: f64, available: bool| ShopItem {
            name: name.into(),
            cost,
            available,
        };
        let achievement = |title: &str, kind: AchievementKind| AchievementConfig {
            title: title.into(),
            kind,
        };

        Self {
            auto_collect_fraction: default_auto_collect_fraction(),
            resources: vec![
                resource("Copper Mine", 0.0, 5.0, 1.0),
                resource("Silver Mine", 50.0, 10.0, 5.0),
                resource("Gold Mine", 500.0, 60.0, 30.0),
                resource("Gem Quarry", 5_000.0, 400.0, 180.0),
                resource("Dragon Hoard", 50_000.0, 2_500.0, 1_000.0),
            ],
            shop_items: vec![
                item("Golden Coin", 100.0, true),
                item("Ruby Coin", 1_000.0, true),
                item("Starry Backdrop", 5_000.0, true),
                item("Dragon Coin", 100_000.0, false),
            ],
            achievements: vec![
                achievement("Pocket Change", AchievementKind::GoldReach(100.0)),
                achievement("Treasure Chest", AchievementKind::GoldReach(1_000.0)),
                achievement("Vault Keeper", AchievementKind::GoldReach(10_000.0)),
                achievement(
                    "Silver Lining",
                    AchievementKind::UnlockResource("Silver Mine".into()),
                ),
                achievement(
                    "Gold Rush",
                    AchievementKind::UnlockResource("Gold Mine".into()),
                ),
                achievement(
                    "Dragon Tamer",
                    AchievementKind::UnlockResource("Dragon Hoard".into()),
                ),
            ],
        }
    }
}
