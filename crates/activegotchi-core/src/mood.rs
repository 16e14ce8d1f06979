//! Mood derivation.
//!
//! Pure mapping from the live reading to the pet's mood. The priority
//! order is fixed: goal achievement beats everything, then sleep
//! adequacy, then the averaged-progress threshold. Sleep affects mood and
//! looks only; it never costs lives.

use serde::{Deserialize, Serialize};

use crate::health::HealthSnapshot;
use crate::storage::DailyGoals;

/// Pet mood, consumed by the (out-of-scope) avatar rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Sleepy,
}

/// Derive the mood from today's live reading.
///
/// First match wins:
/// 1. both goals reached -> `Happy`
/// 2. sleep below goal -> `Sleepy`
/// 3. averaged progress below 80 -> `Sad`
/// 4. otherwise -> `Neutral`
pub fn derive_mood(snapshot: &HealthSnapshot, goals: &DailyGoals) -> Mood {
    if snapshot.has_reached_goals(goals) {
        return Mood::Happy;
    }
    if !snapshot.has_good_sleep(goals) {
        return Mood::Sleepy;
    }
    let (steps_pct, distance_pct) = snapshot.goal_progress(goals);
    if (steps_pct + distance_pct) / 2.0 < 80.0 {
        return Mood::Sad;
    }
    Mood::Neutral
}
