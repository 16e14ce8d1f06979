//! Consecutive-completed-day streak calculation.
//!
//! Pure derivation over the date-keyed record collection; callers invoke it
//! on load and after every progress write. This is the historical,
//! presentation-facing streak. The achievement engine keeps a second,
//! event-fed streak counter with different semantics (see
//! `achievements::stats`); the two are deliberately not unified.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::DayProgress;

/// Current and longest completed-day streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakData {
    /// Consecutive completed days ending today. 0 when today is incomplete.
    pub current: u32,
    /// Longest run of adjacent completed calendar days on record.
    pub longest: u32,
}

/// Compute both streaks against a reference "today".
pub fn calculate_streaks(
    days: &BTreeMap<NaiveDate, DayProgress>,
    today: NaiveDate,
) -> StreakData {
    StreakData {
        current: current_streak(days, today),
        longest: longest_streak(days),
    }
}

/// Walk backwards from today (inclusive), counting consecutive completed
/// days. Today itself being incomplete or unrecorded breaks the streak
/// immediately.
fn current_streak(days: &BTreeMap<NaiveDate, DayProgress>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(date) = cursor {
        match days.get(&date) {
            Some(day) if day.completed => streak += 1,
            _ => break,
        }
        cursor = date.pred_opt();
    }
    streak
}

/// Longest run of completed records on adjacent calendar dates. A missing
/// date between two completed records breaks the run even though the sparse
/// map holds them as neighbors.
fn longest_streak(days: &BTreeMap<NaiveDate, DayProgress>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for (date, day) in days {
        if day.completed {
            let adjacent = prev.and_then(|p| p.succ_opt()) == Some(*date);
            run = if adjacent && run > 0 { run + 1 } else { 1 };
            longest = longest.max(run);
        } else {
            run = 0;
        }
        prev = Some(*date);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed_day(date: NaiveDate) -> DayProgress {
        DayProgress {
            progress: 90,
            completed: true,
            ..DayProgress::zero(date)
        }
    }

    fn map(days: Vec<DayProgress>) -> BTreeMap<NaiveDate, DayProgress> {
        days.into_iter().map(|d| (d.date, d)).collect()
    }

    #[test]
    fn test_empty_store_yields_zero_streaks() {
        let days = BTreeMap::new();
        let streaks = calculate_streaks(&days, ymd(2025, 6, 5));
        assert_eq!(streaks, StreakData::default());
    }

    #[test]
    fn test_today_incomplete_means_no_current_streak() {
        let days = map(vec![
            completed_day(ymd(2025, 6, 3)),
            completed_day(ymd(2025, 6, 4)),
            DayProgress::zero(ymd(2025, 6, 5)),
        ]);
        let streaks = calculate_streaks(&days, ymd(2025, 6, 5));
        assert_eq!(streaks.current, 0);
        assert_eq!(streaks.longest, 2);
    }

    #[test]
    fn test_gap_in_middle_splits_runs() {
        // D1..D5 completed except D3: longest 2, current (today=D5) 2.
        let days = map(vec![
            completed_day(ymd(2025, 6, 1)),
            completed_day(ymd(2025, 6, 2)),
            DayProgress::zero(ymd(2025, 6, 3)),
            completed_day(ymd(2025, 6, 4)),
            completed_day(ymd(2025, 6, 5)),
        ]);
        let streaks = calculate_streaks(&days, ymd(2025, 6, 5));
        assert_eq!(streaks.current, 2);
        assert_eq!(streaks.longest, 2);
    }

    #[test]
    fn test_missing_date_breaks_longest_run() {
        // Completed on the 1st and 3rd with no record for the 2nd: the map
        // holds them as neighbors but the calendar gap splits the run.
        let days = map(vec![
            completed_day(ymd(2025, 6, 1)),
            completed_day(ymd(2025, 6, 3)),
        ]);
        let streaks = calculate_streaks(&days, ymd(2025, 6, 3));
        assert_eq!(streaks.longest, 1);
        assert_eq!(streaks.current, 1);
    }

    #[test]
    fn test_unbroken_week() {
        let days = map((1..=7).map(|d| completed_day(ymd(2025, 6, d))).collect());
        let streaks = calculate_streaks(&days, ymd(2025, 6, 7));
        assert_eq!(streaks.current, 7);
        assert_eq!(streaks.longest, 7);
    }
}
