//! Cumulative user statistics feeding the achievement conditions.
//!
//! `total_steps` and `total_distance` are intentionally NOT running sums:
//! they update with `max(previous, reading)` and so track the highest
//! single observed daily reading. Existing installations were graded under
//! that rule; switching to accumulation would silently re-grade every
//! total-based achievement, so the quirk stays.
//!
//! The streak kept here is a second, simpler mechanism than the one derived
//! from the progress history (`progress::calculate_streaks`): an
//! incremental counter advanced by discrete tracked events, comparing
//! `last_active_date` against yesterday. The two feed different consumers
//! and are deliberately kept apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::ConditionKind;

/// Singleton cumulative counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    /// Highest observed daily step reading (see module note).
    pub total_steps: u32,
    /// Highest observed daily distance reading, kilometers (see module note).
    pub total_distance: f64,
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_pet_taps: u32,
    pub total_pirouettes: u32,
    pub total_goal_achievements: u32,
    pub days_active: u32,
    pub last_active_date: Option<NaiveDate>,
}

impl UserStats {
    /// Current value backing a cumulative condition kind. Daily kinds have
    /// no stat backing and report `None`; the daily evaluation path owns
    /// them.
    pub fn stat_value(&self, kind: ConditionKind) -> Option<f64> {
        match kind {
            ConditionKind::StepsTotal => Some(self.total_steps as f64),
            ConditionKind::DistanceTotal => Some(self.total_distance),
            ConditionKind::StreakDays => Some(self.current_streak as f64),
            ConditionKind::PetTaps => Some(self.total_pet_taps as f64),
            ConditionKind::Pirouettes => Some(self.total_pirouettes as f64),
            ConditionKind::GoalAchievements => Some(self.total_goal_achievements as f64),
            ConditionKind::StepsDaily | ConditionKind::DistanceDaily => None,
        }
    }

    /// Fold one day's tracked reading into the counters.
    ///
    /// The internal streak only moves on a goal-achieved call for a day not
    /// yet marked active: it increments when yesterday was the last active
    /// day, otherwise restarts at 1. `days_active` advances once per
    /// calendar day; `total_goal_achievements` advances on every
    /// goal-achieved call, including repeats within one day.
    pub fn track_daily_progress(
        &mut self,
        steps: u32,
        distance: f64,
        goal_achieved: bool,
        today: NaiveDate,
    ) {
        let new_day = self.last_active_date != Some(today);

        if goal_achieved && new_day {
            let yesterday = today.pred_opt();
            self.current_streak = if self.last_active_date == yesterday && yesterday.is_some() {
                self.current_streak + 1
            } else {
                1
            };
            self.max_streak = self.max_streak.max(self.current_streak);
        }

        if new_day {
            self.days_active += 1;
        }
        if goal_achieved {
            self.total_goal_achievements += 1;
        }

        self.total_steps = self.total_steps.max(steps);
        self.total_distance = self.total_distance.max(distance);
        self.last_active_date = Some(today);
    }
}
