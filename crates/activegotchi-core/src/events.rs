//! Core-emitted events.
//!
//! Every observable state change produces an [`Event`]. The presentation
//! layer polls (drains) the queue and reacts with animation, sound, or
//! haptics; the core itself never triggers side effects.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::Mood;
use crate::pet::PetMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    PetCreated {
        name: String,
        mode: PetMode,
        at: DateTime<Utc>,
    },
    ProgressUpdated {
        date: NaiveDate,
        progress: u8,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// Both daily goals newly reached for a date.
    GoalsReached {
        date: NaiveDate,
        at: DateTime<Utc>,
    },
    MoodChanged {
        mood: Mood,
        at: DateTime<Utc>,
    },
    LifeLost {
        date: NaiveDate,
        remaining: u8,
        at: DateTime<Utc>,
    },
    /// Terminal: the presentation layer forces re-onboarding.
    PetDied {
        name: String,
        at: DateTime<Utc>,
    },
    AchievementUnlocked {
        id: String,
        title: String,
        at: DateTime<Utc>,
    },
    ProgressReset {
        at: DateTime<Utc>,
    },
}
