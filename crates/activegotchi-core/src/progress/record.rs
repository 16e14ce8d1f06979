//! Daily progress records and their derivation rules.
//!
//! A [`DayProgress`] summarizes one calendar day. Two predicates with
//! different thresholds coexist and must not be conflated:
//!
//! - `completed`: the averaged progress percent reached 80.
//! - `goals_reached`: BOTH raw goals (steps and distance) were met.
//!
//! The lifecycle rules key off `goals_reached`; the streak/weekly-map rules
//! key off `completed`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::DailyGoals;

/// Averaged progress percent at or above which a day counts as completed.
pub const COMPLETION_THRESHOLD: u8 = 80;

/// Progress summary for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    /// Calendar date, `yyyy-MM-dd` when serialized.
    pub date: NaiveDate,
    /// Steps recorded for the day.
    pub steps: u32,
    /// Distance recorded for the day, kilometers.
    pub distance: f64,
    /// Averaged progress percent, 0-100.
    pub progress: u8,
    /// Both raw goals met.
    pub goals_reached: bool,
    /// Averaged progress reached [`COMPLETION_THRESHOLD`].
    pub completed: bool,
}

impl DayProgress {
    /// The implicit "no activity yet" record for a date.
    pub fn zero(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            distance: 0.0,
            progress: 0,
            goals_reached: false,
            completed: false,
        }
    }

    /// Build a full record from a raw reading against the configured goals.
    pub fn from_reading(date: NaiveDate, steps: u32, distance: f64, goals: &DailyGoals) -> Self {
        let progress = progress_percent(steps, distance, goals);
        Self {
            date,
            steps,
            distance,
            progress,
            goals_reached: goals_met(steps, distance, goals),
            completed: progress >= COMPLETION_THRESHOLD,
        }
    }
}

/// Averaged progress percent: steps% and distance% each capped at 100,
/// then averaged and rounded.
pub fn progress_percent(steps: u32, distance: f64, goals: &DailyGoals) -> u8 {
    let steps_pct = if goals.steps == 0 {
        100.0
    } else {
        (steps as f64 / goals.steps as f64 * 100.0).min(100.0)
    };
    let distance_pct = if goals.distance_km <= 0.0 {
        100.0
    } else {
        (distance / goals.distance_km * 100.0).min(100.0)
    };
    ((steps_pct + distance_pct) / 2.0).round() as u8
}

/// Strict both-goals-met predicate.
pub fn goals_met(steps: u32, distance: f64, goals: &DailyGoals) -> bool {
    steps >= goals.steps && distance >= goals.distance_km
}

/// Partial update merged onto a day's record by the progress tracker.
///
/// `completed` is deliberately not part of the update: it is recomputed
/// from `progress` when `progress` is part of the update and preserved from
/// the existing record otherwise. Callers never set it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayProgressUpdate {
    pub steps: Option<u32>,
    pub distance: Option<f64>,
    pub progress: Option<u8>,
    pub goals_reached: Option<bool>,
}

impl DayProgressUpdate {
    /// Full update derived from a raw reading (the periodic health poll).
    pub fn from_reading(steps: u32, distance: f64, goals: &DailyGoals) -> Self {
        let progress = progress_percent(steps, distance, goals);
        Self {
            steps: Some(steps),
            distance: Some(distance),
            progress: Some(progress),
            goals_reached: Some(goals_met(steps, distance, goals)),
        }
    }

    /// Merge this update onto an existing record.
    pub fn apply(&self, existing: &DayProgress) -> DayProgress {
        let progress = self.progress.unwrap_or(existing.progress);
        let completed = match self.progress {
            Some(p) => p >= COMPLETION_THRESHOLD,
            None => existing.completed,
        };
        DayProgress {
            date: existing.date,
            steps: self.steps.unwrap_or(existing.steps),
            distance: self.distance.unwrap_or(existing.distance),
            progress,
            goals_reached: self.goals_reached.unwrap_or(existing.goals_reached),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn goals() -> DailyGoals {
        DailyGoals::default()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_progress_percent_caps_each_component() {
        // Steps far over goal, zero distance: capped 100 averaged with 0.
        assert_eq!(progress_percent(50_000, 0.0, &goals()), 50);
    }

    #[test]
    fn test_completed_independent_of_goals_reached() {
        // 10000 steps, 4.8km: steps 100%, distance 60% -> progress 80,
        // completed, but the distance goal is unmet.
        let day = DayProgress::from_reading(date(), 10_000, 4.8, &goals());
        assert_eq!(day.progress, 80);
        assert!(day.completed);
        assert!(!day.goals_reached);
    }

    #[test]
    fn test_goals_reached_requires_both() {
        assert!(!goals_met(10_000, 7.9, &goals()));
        assert!(!goals_met(9_999, 8.0, &goals()));
        assert!(goals_met(10_000, 8.0, &goals()));
    }

    #[test]
    fn test_apply_with_progress_recomputes_completed() {
        let existing = DayProgress::zero(date());
        let update = DayProgressUpdate {
            progress: Some(85),
            ..Default::default()
        };
        let merged = update.apply(&existing);
        assert!(merged.completed);
    }

    #[test]
    fn test_apply_without_progress_preserves_completed() {
        let mut existing = DayProgress::zero(date());
        existing.progress = 90;
        existing.completed = true;

        let update = DayProgressUpdate {
            steps: Some(4_000),
            ..Default::default()
        };
        let merged = update.apply(&existing);
        assert_eq!(merged.steps, 4_000);
        assert!(merged.completed);
        assert_eq!(merged.progress, 90);
    }

    #[test]
    fn test_apply_without_progress_never_flips_completed() {
        // Even goal-level raw fields cannot complete a day; only a
        // progress value in the update moves the completed flag.
        let existing = DayProgress::zero(date());
        let update = DayProgressUpdate {
            steps: Some(11_000),
            distance: Some(9.0),
            goals_reached: Some(true),
            ..Default::default()
        };
        let merged = update.apply(&existing);
        assert!(!merged.completed);
        assert_eq!(merged.progress, 0);
    }

    proptest! {
        #[test]
        fn prop_completed_matches_threshold(steps in 0u32..40_000, distance in 0.0f64..30.0) {
            let day = DayProgress::from_reading(date(), steps, distance, &goals());
            prop_assert_eq!(day.completed, day.progress >= COMPLETION_THRESHOLD);
            // goals_reached never influences completed.
            prop_assert_eq!(
                day.goals_reached,
                steps >= 10_000 && distance >= 8.0
            );
        }
    }
}
