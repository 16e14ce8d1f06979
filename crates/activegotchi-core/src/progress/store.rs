//! Date-keyed progress record collection.
//!
//! Records are created lazily on first write, replaced field-by-field on
//! update, and never deleted individually; the only destructive operation
//! is a full reset. The collection crosses the persistence boundary as a
//! plain string-keyed object, with explicit conversion both ways.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use super::record::{DayProgress, DayProgressUpdate};
use crate::storage::{keys, KeyValueStore};

/// Owning store for per-day progress records.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    days: BTreeMap<NaiveDate, DayProgress>,
}

impl ProgressTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker seeded with an existing history.
    pub fn with_history(days: BTreeMap<NaiveDate, DayProgress>) -> Self {
        Self { days }
    }

    /// Load the collection from the persistent store. A missing key or a
    /// corrupted payload yields an empty history; individually unparseable
    /// date keys are skipped.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(keys::PROGRESS) else {
            return Self::new();
        };
        let serialized: BTreeMap<String, DayProgress> = match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "progress history corrupted, starting empty");
                return Self::new();
            }
        };
        let mut days = BTreeMap::new();
        for (key, day) in serialized {
            match key.parse::<NaiveDate>() {
                Ok(date) => {
                    days.insert(date, day);
                }
                Err(_) => warn!(key, "skipping progress entry with invalid date key"),
            }
        }
        Self { days }
    }

    /// Write the collection to the persistent store as a `date -> record`
    /// object keyed by `yyyy-MM-dd` strings.
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), crate::error::StorageError> {
        let serialized: BTreeMap<String, &DayProgress> = self
            .days
            .iter()
            .map(|(date, day)| (date.format("%Y-%m-%d").to_string(), day))
            .collect();
        let json = serde_json::to_string(&serialized).unwrap_or_else(|_| "{}".to_string());
        store.set(keys::PROGRESS, &json)
    }

    /// Merge a partial update onto the record for `date`, creating a
    /// zero-record first if the date is absent. Returns the resulting record.
    pub fn upsert(&mut self, date: NaiveDate, update: &DayProgressUpdate) -> &DayProgress {
        let existing = self
            .days
            .entry(date)
            .or_insert_with(|| DayProgress::zero(date));
        *existing = update.apply(existing);
        existing
    }

    /// Record for `date`, or the zero-record if nothing was written yet.
    /// Absence is "no activity", not an error.
    pub fn get(&self, date: NaiveDate) -> DayProgress {
        self.days
            .get(&date)
            .cloned()
            .unwrap_or_else(|| DayProgress::zero(date))
    }

    /// Record for `date` only if one was actually written.
    pub fn get_recorded(&self, date: NaiveDate) -> Option<&DayProgress> {
        self.days.get(&date)
    }

    /// The full history, ascending by date.
    pub fn days(&self) -> &BTreeMap<NaiveDate, DayProgress> {
        &self.days
    }

    /// Number of recorded days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Count of days whose averaged progress reached the completion
    /// threshold.
    pub fn total_days_completed(&self) -> usize {
        self.days.values().filter(|d| d.completed).count()
    }

    /// Drop the entire history, optionally replacing it with a seeded one.
    /// Nothing from the previous history survives.
    pub fn reset(&mut self, replacement: Option<BTreeMap<NaiveDate, DayProgress>>) {
        self.days = replacement.unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_absent_returns_zero_record() {
        let tracker = ProgressTracker::new();
        let day = tracker.get(ymd(2025, 6, 2));
        assert_eq!(day, DayProgress::zero(ymd(2025, 6, 2)));
    }

    #[test]
    fn test_upsert_creates_then_merges() {
        let mut tracker = ProgressTracker::new();
        let date = ymd(2025, 6, 2);

        tracker.upsert(
            date,
            &DayProgressUpdate {
                steps: Some(5_000),
                progress: Some(40),
                ..Default::default()
            },
        );
        // Second partial update touching only distance keeps the rest.
        let day = tracker
            .upsert(
                date,
                &DayProgressUpdate {
                    distance: Some(2.5),
                    ..Default::default()
                },
            )
            .clone();

        assert_eq!(day.steps, 5_000);
        assert_eq!(day.distance, 2.5);
        assert_eq!(day.progress, 40);
        assert!(!day.completed);
    }

    #[test]
    fn test_upsert_without_progress_leaves_completed_untouched() {
        let mut tracker = ProgressTracker::new();
        let date = ymd(2025, 6, 2);
        tracker.upsert(
            date,
            &DayProgressUpdate {
                goals_reached: Some(true),
                ..Default::default()
            },
        );
        assert!(!tracker.get(date).completed);
    }

    #[test]
    fn test_persist_roundtrip_uses_string_keys() {
        let mut tracker = ProgressTracker::new();
        let date = ymd(2025, 6, 2);
        tracker.upsert(
            date,
            &DayProgressUpdate {
                steps: Some(12_000),
                progress: Some(100),
                goals_reached: Some(true),
                ..Default::default()
            },
        );

        let mut store = MemoryStore::new();
        tracker.persist(&mut store).unwrap();

        let raw = store.get(keys::PROGRESS).unwrap();
        assert!(raw.contains("\"2025-06-02\""));

        let reloaded = ProgressTracker::load(&store);
        assert_eq!(reloaded.get(date), tracker.get(date));
    }

    #[test]
    fn test_load_corrupted_payload_starts_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::PROGRESS, "not a map").unwrap();
        let tracker = ProgressTracker::load(&store);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_load_skips_invalid_date_keys() {
        let mut store = MemoryStore::new();
        store
            .set(
                keys::PROGRESS,
                r#"{"2025-06-02":{"date":"2025-06-02","steps":1,"distance":0.5,"progress":3,"goals_reached":false,"completed":false},
                    "garbage":{"date":"2025-06-03","steps":1,"distance":0.5,"progress":3,"goals_reached":false,"completed":false}}"#,
            )
            .unwrap();
        let tracker = ProgressTracker::load(&store);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_reset_discards_history() {
        let mut tracker = ProgressTracker::new();
        tracker.upsert(ymd(2025, 6, 2), &DayProgressUpdate::default());
        tracker.reset(None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_total_days_completed() {
        let mut tracker = ProgressTracker::new();
        tracker.upsert(
            ymd(2025, 6, 1),
            &DayProgressUpdate {
                progress: Some(85),
                ..Default::default()
            },
        );
        tracker.upsert(
            ymd(2025, 6, 2),
            &DayProgressUpdate {
                progress: Some(40),
                ..Default::default()
            },
        );
        assert_eq!(tracker.total_days_completed(), 1);
    }
}
