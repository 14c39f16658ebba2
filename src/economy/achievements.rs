//! Achievement triggers and the default tracker.
//!
//! The economy raises triggers through `AchievementNotifier` and never
//! remembers what it already raised. Deduplication belongs to the notifier:
//! `AchievementTracker` ignores triggers for entries that are already unlocked.

use serde::{Deserialize, Serialize};

/// What an achievement waits for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AchievementKind {
    /// Total gold reached the threshold.
    GoldReach(f64),
    /// The named resource was unlocked.
    UnlockResource(String),
}

impl AchievementKind {
    pub fn description(&self) -> String {
        match self {
            AchievementKind::GoldReach(threshold) => {
                format!("Reach {} gold", super::logic::format_number(*threshold))
            }
            AchievementKind::UnlockResource(name) => format!("Unlock {}", name),
        }
    }
}

/// Configured achievement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AchievementConfig {
    pub title: String,
    pub kind: AchievementKind,
}

/// Receiver of achievement triggers.
pub trait AchievementNotifier {
    /// Configured achievements, in order.
    fn achievements(&self) -> Vec<AchievementKind>;

    /// Deliver a trigger. May be called repeatedly for the same kind.
    fn unlock_achievement(&mut self, kind: &AchievementKind);
}

#[derive(Clone, Debug)]
pub struct AchievementEntry {
    pub title: String,
    pub kind: AchievementKind,
    pub unlocked: bool,
}

/// Tracks which configured achievements have been earned.
#[derive(Clone, Debug, Default)]
pub struct AchievementTracker {
    pub entries: Vec<AchievementEntry>,
    /// Titles unlocked since the last `take_recent()`.
    recent: Vec<String>,
}

impl AchievementTracker {
    pub fn new(configs: &[AchievementConfig]) -> Self {
        Self {
            entries: configs
                .iter()
                .map(|c| AchievementEntry {
                    title: c.title.clone(),
                    kind: c.kind.clone(),
                    unlocked: false,
                })
                .collect(),
            recent: Vec::new(),
        }
    }

    pub fn is_unlocked(&self, kind: &AchievementKind) -> bool {
        self.entries.iter().any(|e| e.unlocked && e.kind == *kind)
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.unlocked).count()
    }

    /// Drain titles unlocked since the last call (for toast notifications).
    pub fn take_recent(&mut self) -> Vec<String> {
        std::mem::take(&mut self.recent)
    }
}

impl AchievementNotifier for AchievementTracker {
    fn achievements(&self) -> Vec<AchievementKind> {
        self.entries.iter().map(|e| e.kind.clone()).collect()
    }

    fn unlock_achievement(&mut self, kind: &AchievementKind) {
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| !e.unlocked && e.kind == *kind)
        {
            entry.unlocked = true;
            log::info!("achievement unlocked: {} ({})", entry.title, kind.description());
            self.recent.push(entry.title.clone());
        }
    }
}
