//! Monday-start weekly projection of the progress history.
//!
//! Read-only and rebuilt on demand; never persisted, never cached across
//! writes.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::record::DayProgress;
use super::streak::calculate_streaks;

/// Seven-day window over the progress history, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    /// Monday of the projected week.
    pub start_date: NaiveDate,
    /// Exactly 7 records, Monday..Sunday; zero-records for unwritten dates.
    pub days: Vec<DayProgress>,
    /// Current streak at the reference date.
    pub streak: u32,
    /// ISO week number of the reference date, for display.
    pub week_number: u32,
    /// Rough count of weeks with any history.
    pub total_weeks: u32,
}

impl WeeklyProgress {
    /// Percent of this week's days that are completed.
    pub fn completion_percent(&self) -> u8 {
        let completed = self.days.iter().filter(|d| d.completed).count();
        (completed as f64 / 7.0 * 100.0).round() as u8
    }
}

/// Project the history into the week containing `reference`.
///
/// Always yields 7 well-formed entries; dates absent from the history are
/// filled with zero-records rather than omitted.
pub fn build_week(
    days: &BTreeMap<NaiveDate, DayProgress>,
    reference: NaiveDate,
) -> WeeklyProgress {
    let start_date = reference.week(Weekday::Mon).first_day();

    let week_days = (0..7)
        .map(|offset| {
            let date = start_date + Days::new(offset);
            days.get(&date)
                .cloned()
                .unwrap_or_else(|| DayProgress::zero(date))
        })
        .collect();

    let streaks = calculate_streaks(days, reference);

    WeeklyProgress {
        start_date,
        days: week_days,
        streak: streaks.current,
        week_number: reference.iso_week().week(),
        total_weeks: (days.len() as u32).div_ceil(7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_always_has_seven_entries() {
        let week = build_week(&BTreeMap::new(), ymd(2025, 6, 4));
        assert_eq!(week.days.len(), 7);
        assert!(week.days.iter().all(|d| !d.completed && d.steps == 0));
    }

    #[test]
    fn test_week_starts_on_monday_before_reference() {
        // 2025-06-04 is a Wednesday; the week starts Monday 2025-06-02.
        let week = build_week(&BTreeMap::new(), ymd(2025, 6, 4));
        assert_eq!(week.start_date, ymd(2025, 6, 2));
        assert_eq!(week.days[0].date, ymd(2025, 6, 2));
        assert_eq!(week.days[6].date, ymd(2025, 6, 8));
    }

    #[test]
    fn test_monday_reference_is_its_own_week_start() {
        let week = build_week(&BTreeMap::new(), ymd(2025, 6, 2));
        assert_eq!(week.start_date, ymd(2025, 6, 2));
    }

    #[test]
    fn test_recorded_days_appear_in_slot() {
        let date = ymd(2025, 6, 3); // Tuesday
        let mut days = BTreeMap::new();
        days.insert(
            date,
            DayProgress {
                steps: 9_000,
                progress: 82,
                completed: true,
                ..DayProgress::zero(date)
            },
        );

        let week = build_week(&days, ymd(2025, 6, 4));
        assert_eq!(week.days[1].steps, 9_000);
        assert!(week.days[1].completed);
        // Other slots stay zero-filled.
        assert_eq!(week.days[2].steps, 0);
    }

    #[test]
    fn test_completion_percent() {
        let mut days = BTreeMap::new();
        for d in 2..=4 {
            let date = ymd(2025, 6, d);
            days.insert(
                date,
                DayProgress {
                    progress: 90,
                    completed: true,
                    ..DayProgress::zero(date)
                },
            );
        }
        let week = build_week(&days, ymd(2025, 6, 4));
        assert_eq!(week.completion_percent(), 43); // 3 of 7
    }
}
