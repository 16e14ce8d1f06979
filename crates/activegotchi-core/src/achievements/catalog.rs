//! Achievement definitions and the fixed default catalog.
//!
//! The catalog ships with the code; persisted copies are merged onto the
//! defaults by `id` on load, so achievements added in an update appear
//! without wiping existing unlock state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display grouping of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Steps,
    Distance,
    Streak,
    Special,
    Milestones,
}

/// Display rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// What a condition is measured against.
///
/// Daily kinds are evaluated from the day's raw reading; all other kinds
/// are evaluated from cumulative [`UserStats`](super::UserStats). The two
/// paths stay separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    StepsDaily,
    StepsTotal,
    DistanceDaily,
    DistanceTotal,
    StreakDays,
    PetTaps,
    Pirouettes,
    GoalAchievements,
}

impl ConditionKind {
    /// Evaluated from the day's raw reading rather than cumulative stats.
    pub fn is_daily(&self) -> bool {
        matches!(self, ConditionKind::StepsDaily | ConditionKind::DistanceDaily)
    }
}

/// Unlock condition: a measured kind and its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    pub value: f64,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: Category,
    pub condition: Condition,
    /// Monotonic: once true, never reverts.
    #[serde(default)]
    pub unlocked: bool,
    /// Stamped exactly once, at unlock.
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
    /// Latest evaluated progress percent, 0-100.
    #[serde(default)]
    pub progress: f64,
    pub rarity: Rarity,
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    category: Category,
    kind: ConditionKind,
    value: f64,
    rarity: Rarity,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category,
        condition: Condition { kind, value },
        unlocked: false,
        unlocked_at: None,
        progress: 0.0,
        rarity,
    }
}

/// The fixed code-defined catalog.
pub fn default_achievements() -> Vec<Achievement> {
    use Category::*;
    use ConditionKind::*;
    use Rarity::*;

    vec![
        // Steps
        entry("first_steps", "First Steps", "Take your first 100 steps", "👶", Steps, StepsTotal, 100.0, Common),
        entry("daily_walker", "Daily Walker", "Reach your daily step goal", "🚶", Steps, StepsDaily, 10_000.0, Common),
        entry("step_master", "Step Master", "Walk 100,000 total steps", "🏃", Steps, StepsTotal, 100_000.0, Epic),
        entry("marathon_walker", "Marathon Walker", "Walk 1 million steps", "🏆", Steps, StepsTotal, 1_000_000.0, Legendary),
        // Distance
        entry("first_kilometer", "First Kilometer", "Walk your first kilometer", "📍", Distance, DistanceTotal, 1.0, Common),
        entry("distance_daily", "Daily Distance", "Reach your daily distance goal", "🎯", Distance, DistanceDaily, 8.0, Common),
        entry("hundred_km", "Century Walker", "Walk 100 kilometers total", "💯", Distance, DistanceTotal, 100.0, Rare),
        // Streaks
        entry("streak_3", "Getting Started", "Maintain a 3-day streak", "🔥", Streak, StreakDays, 3.0, Common),
        entry("streak_7", "Week Warrior", "Maintain a 7-day streak", "⚡", Streak, StreakDays, 7.0, Rare),
        entry("streak_30", "Consistency King", "Maintain a 30-day streak", "👑", Streak, StreakDays, 30.0, Epic),
        // Special
        entry("pet_lover", "Pet Lover", "Tap your pet 100 times", "💕", Special, PetTaps, 100.0, Common),
        entry("pirouette_master", "Pirouette Master", "Make your pet do 50 pirouettes", "🩰", Special, Pirouettes, 50.0, Rare),
        entry("goal_crusher", "Goal Crusher", "Achieve your daily goals 10 times", "💪", Milestones, GoalAchievements, 10.0, Rare),
    ]
}

/// Overlay stored entries onto the current defaults, keyed by `id`.
/// Entries for ids no longer in the catalog are dropped; new defaults
/// appear locked.
pub fn merge_with_defaults(stored: Vec<Achievement>) -> Vec<Achievement> {
    let mut merged = default_achievements();
    for stored_achievement in stored {
        if let Some(slot) = merged.iter_mut().find(|a| a.id == stored_achievement.id) {
            *slot = stored_achievement;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = default_achievements();
        let mut ids: Vec<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_starts_locked() {
        assert!(default_achievements()
            .iter()
            .all(|a| !a.unlocked && a.unlocked_at.is_none() && a.progress == 0.0));
    }

    #[test]
    fn test_merge_keeps_stored_unlock_state() {
        let mut stored = default_achievements();
        stored[0].unlocked = true;
        stored[0].progress = 100.0;
        // Simulate an old install that never saw the rest of the catalog.
        stored.truncate(1);

        let merged = merge_with_defaults(stored);
        assert_eq!(merged.len(), default_achievements().len());
        assert!(merged[0].unlocked);
        assert!(!merged[1].unlocked);
    }

    #[test]
    fn test_merge_drops_retired_ids() {
        let mut stored = default_achievements();
        stored[0].id = "no_longer_exists".to_string();
        let merged = merge_with_defaults(stored);
        assert!(merged.iter().all(|a| a.id != "no_longer_exists"));
    }
}
