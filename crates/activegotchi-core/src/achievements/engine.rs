//! Achievement evaluation engine.
//!
//! Two evaluation paths that never merge:
//!
//! - the cumulative path re-grades every locked achievement against
//!   [`UserStats`] whenever the stats change (daily-condition achievements
//!   report 0 here; their progress is owned by the other path);
//! - the daily path grades only daily-condition achievements, directly
//!   against the day's raw reading.
//!
//! Unlocking is one-way: `unlocked` flips true at most once, `unlocked_at`
//! is stamped, a notification is enqueued, and every later pass skips the
//! entry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::{default_achievements, merge_with_defaults, Achievement};
use super::stats::UserStats;
use crate::storage::{keys, KeyValueStore};

/// Queue entry produced when an achievement unlocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementNotification {
    pub achievement: Achievement,
    pub timestamp: DateTime<Utc>,
    pub seen: bool,
}

/// Catalog + stats + notification queue, with the evaluation rules.
#[derive(Debug, Clone)]
pub struct AchievementEngine {
    achievements: Vec<Achievement>,
    stats: UserStats,
    notifications: Vec<AchievementNotification>,
}

impl Default for AchievementEngine {
    fn default() -> Self {
        Self {
            achievements: default_achievements(),
            stats: UserStats::default(),
            notifications: Vec::new(),
        }
    }
}

impl AchievementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from the persistent store. Stored achievements are merged
    /// onto the code-defined defaults; any corrupted payload falls back to
    /// its default rather than failing.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let achievements = match store.get(keys::ACHIEVEMENTS) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(stored) => merge_with_defaults(stored),
                Err(e) => {
                    warn!(error = %e, "achievement catalog corrupted, reseeding defaults");
                    default_achievements()
                }
            },
            None => default_achievements(),
        };

        let stats = store
            .get(keys::USER_STATS)
            .and_then(|raw| {
                serde_json::from_str(&raw)
                    .map_err(|e| warn!(error = %e, "user stats corrupted, resetting"))
                    .ok()
            })
            .unwrap_or_default();

        let notifications = store
            .get(keys::NOTIFICATIONS)
            .and_then(|raw| {
                serde_json::from_str(&raw)
                    .map_err(|e| warn!(error = %e, "notification queue corrupted, clearing"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            achievements,
            stats,
            notifications,
        }
    }

    /// Write all three collections to the persistent store.
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), crate::error::StorageError> {
        let achievements =
            serde_json::to_string(&self.achievements).unwrap_or_else(|_| "[]".to_string());
        let stats = serde_json::to_string(&self.stats).unwrap_or_else(|_| "{}".to_string());
        let notifications =
            serde_json::to_string(&self.notifications).unwrap_or_else(|_| "[]".to_string());
        store.set(keys::ACHIEVEMENTS, &achievements)?;
        store.set(keys::USER_STATS, &stats)?;
        store.set(keys::NOTIFICATIONS, &notifications)
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// One pet tap. Returns achievements newly unlocked by this call.
    pub fn track_pet_tap(&mut self, now: DateTime<Utc>) -> Vec<Achievement> {
        self.stats.total_pet_taps += 1;
        self.check_cumulative(now)
    }

    /// One pirouette. Returns achievements newly unlocked by this call.
    pub fn track_pirouette(&mut self, now: DateTime<Utc>) -> Vec<Achievement> {
        self.stats.total_pirouettes += 1;
        self.check_cumulative(now)
    }

    /// Fold a day's reading into the stats and re-grade the cumulative
    /// conditions. Returns achievements newly unlocked by this call.
    pub fn track_daily_progress(
        &mut self,
        steps: u32,
        distance: f64,
        goal_achieved: bool,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<Achievement> {
        self.stats
            .track_daily_progress(steps, distance, goal_achieved, today);
        self.check_cumulative(now)
    }

    /// Grade the daily-condition achievements against a raw reading. Other
    /// conditions are untouched. Returns achievements newly unlocked by
    /// this call.
    pub fn check_daily_achievements(
        &mut self,
        steps: u32,
        distance: f64,
        now: DateTime<Utc>,
    ) -> Vec<Achievement> {
        let mut newly_unlocked = Vec::new();

        for achievement in &mut self.achievements {
            if achievement.unlocked || !achievement.condition.kind.is_daily() {
                continue;
            }
            let current = match achievement.condition.kind {
                super::ConditionKind::StepsDaily => steps as f64,
                super::ConditionKind::DistanceDaily => distance,
                _ => unreachable!("non-daily kinds filtered above"),
            };
            achievement.progress = (current / achievement.condition.value * 100.0).min(100.0);

            if achievement.progress >= 100.0 {
                achievement.unlocked = true;
                achievement.unlocked_at = Some(now);
                newly_unlocked.push(achievement.clone());
            }
        }

        self.enqueue_notifications(&newly_unlocked, now);
        newly_unlocked
    }

    /// Re-grade every locked achievement against the current stats.
    /// Daily-condition achievements have no stat backing and report 0 here.
    fn check_cumulative(&mut self, now: DateTime<Utc>) -> Vec<Achievement> {
        let mut newly_unlocked = Vec::new();

        for achievement in &mut self.achievements {
            if achievement.unlocked {
                continue;
            }
            let progress = match self.stats.stat_value(achievement.condition.kind) {
                Some(current) => (current / achievement.condition.value * 100.0).min(100.0),
                None => 0.0,
            };
            achievement.progress = progress;

            if progress >= 100.0 {
                achievement.unlocked = true;
                achievement.unlocked_at = Some(now);
                newly_unlocked.push(achievement.clone());
            }
        }

        self.enqueue_notifications(&newly_unlocked, now);
        newly_unlocked
    }

    fn enqueue_notifications(&mut self, unlocked: &[Achievement], now: DateTime<Utc>) {
        for achievement in unlocked {
            self.notifications.push(AchievementNotification {
                achievement: achievement.clone(),
                timestamp: now,
                seen: false,
            });
        }
    }

    /// Notifications not yet shown, oldest first.
    pub fn unseen_notifications(&self) -> Vec<&AchievementNotification> {
        self.notifications.iter().filter(|n| !n.seen).collect()
    }

    /// Batch-acknowledge the whole queue.
    pub fn mark_notifications_seen(&mut self) {
        for notification in &mut self.notifications {
            notification.seen = true;
        }
    }

    /// Wipe everything back to defaults (full app reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
