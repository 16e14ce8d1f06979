//! Seeded demo history generator.
//!
//! Produces three weeks of plausible activity so a fresh install (or a
//! demo-mode reset) has something to render. Deterministic under a seed so
//! tests and screenshots are reproducible.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use super::record::DayProgress;
use crate::storage::DailyGoals;

/// Days of history generated, today included.
const HISTORY_DAYS: u64 = 22;

/// Fraction of generated days rolled as active/completed.
const COMPLETION_RATE: f64 = 0.7;

/// Generate a demo history ending at `today`.
pub fn demo_history(
    today: NaiveDate,
    goals: &DailyGoals,
    seed: u64,
) -> BTreeMap<NaiveDate, DayProgress> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut days = BTreeMap::new();

    for back in (0..HISTORY_DAYS).rev() {
        let Some(date) = today.checked_sub_days(Days::new(back)) else {
            continue;
        };

        let active = rng.gen_bool(COMPLETION_RATE);
        let (steps, distance) = if active {
            (
                rng.gen_range(8_000..13_000),
                rng.gen_range(6.0..9.0_f64),
            )
        } else {
            (
                rng.gen_range(2_000..9_000),
                rng.gen_range(1.0..6.0_f64),
            )
        };
        let distance = (distance * 10.0).round() / 10.0;

        let mut day = DayProgress::from_reading(date, steps, distance, goals);
        // Inactive days never count as completed, whatever they rolled.
        day.completed &= active;
        days.insert(date, day);
    }

    days
}
