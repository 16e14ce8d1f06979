//! Health data source boundary.
//!
//! Real device integration (HealthKit, Google Fit) is out of scope; the
//! core consumes the [`HealthDataSource`] trait and ships a mock that the
//! demo UI drives through simulated increments.

use serde::{Deserialize, Serialize};

use crate::storage::DailyGoals;

/// A point-in-time activity reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub steps: u32,
    /// Kilometers.
    pub distance_km: f64,
    /// Hours slept last night, when the source knows it.
    pub sleep_hours: Option<f64>,
}

impl HealthSnapshot {
    /// Both daily goals met by this reading.
    pub fn has_reached_goals(&self, goals: &DailyGoals) -> bool {
        crate::progress::goals_met(self.steps, self.distance_km, goals)
    }

    /// Per-goal progress percent, each capped at 100.
    pub fn goal_progress(&self, goals: &DailyGoals) -> (f64, f64) {
        let steps_pct = if goals.steps == 0 {
            100.0
        } else {
            (self.steps as f64 / goals.steps as f64 * 100.0).min(100.0)
        };
        let distance_pct = if goals.distance_km <= 0.0 {
            100.0
        } else {
            (self.distance_km / goals.distance_km * 100.0).min(100.0)
        };
        (steps_pct, distance_pct)
    }

    /// Sleep at or above the goal. An unknown reading counts as no sleep.
    pub fn has_good_sleep(&self, goals: &DailyGoals) -> bool {
        self.sleep_hours.unwrap_or(0.0) >= goals.sleep_goal()
    }
}

/// Provider of activity readings.
pub trait HealthDataSource {
    /// Current reading for today.
    fn snapshot(&self) -> HealthSnapshot;

    /// Ask the platform for health-data access. Mock sources grant
    /// immediately.
    fn request_permissions(&mut self) -> bool;
}

/// Simulated health source with mutable readings.
#[derive(Debug, Clone)]
pub struct MockHealthSource {
    steps: u32,
    distance_km: f64,
    sleep_hours: Option<f64>,
    permissions_granted: bool,
}

impl Default for MockHealthSource {
    fn default() -> Self {
        Self {
            steps: 7_234,
            distance_km: 5.2,
            sleep_hours: Some(6.2),
            permissions_granted: false,
        }
    }
}

impl MockHealthSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current reading.
    pub fn set_reading(&mut self, steps: u32, distance_km: f64) {
        self.steps = steps;
        self.distance_km = distance_km;
    }

    /// Set last night's sleep.
    pub fn set_sleep_hours(&mut self, hours: Option<f64>) {
        self.sleep_hours = hours;
    }

    /// Simulated user interaction adds to today's reading.
    pub fn apply_increment(&mut self, steps: u32, distance_km: f64) {
        self.steps = self.steps.saturating_add(steps);
        self.distance_km += distance_km;
    }
}

impl HealthDataSource for MockHealthSource {
    fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            steps: self.steps,
            distance_km: self.distance_km,
            sleep_hours: self.sleep_hours,
        }
    }

    fn request_permissions(&mut self) -> bool {
        self.permissions_granted = true;
        true
    }
}
