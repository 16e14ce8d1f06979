//! Pet identity and the daily life-decrement state machine.
//!
//! A mortal pet starts with 5 lives and loses one for every past day on
//! which BOTH daily goals were not reached (`goals_reached`, the strict
//! predicate; a day can be `completed` at 80% average progress and still
//! cost a life). The check always judges yesterday, never the in-progress
//! today, and is idempotent: `last_checked_date` guards against a second
//! penalty for the same date. Death at zero lives is terminal until the pet
//! is destroyed and recreated via onboarding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::progress::ProgressTracker;
use crate::storage::{keys, KeyValueStore};

/// Lives a mortal pet starts with.
pub const STARTING_LIVES: u8 = 5;

/// Survival mode chosen at onboarding. Not re-settable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetMode {
    /// Loses a life for each day both goals were missed.
    Mortal,
    /// Never loses lives.
    Immortal,
}

/// Cosmetic avatar family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarKind {
    Fox,
    Dog,
    Cat,
    Frog,
    Blob,
    Element,
}

/// The single current pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetMeta {
    pub name: String,
    pub mode: PetMode,
    /// Remaining lives; 0 and meaningless for immortal pets.
    pub lives_remaining: u8,
    /// Seed for procedural avatar generation.
    pub avatar_seed: String,
    pub alive: bool,
    /// Last date the daily outcome was evaluated for. Guards idempotency.
    pub last_checked_date: Option<NaiveDate>,
    pub avatar_kind: Option<AvatarKind>,
    pub primary_color: Option<String>,
}

impl PetMeta {
    /// Fresh pet as produced by onboarding.
    pub fn new(
        name: impl Into<String>,
        mode: PetMode,
        avatar_kind: Option<AvatarKind>,
        primary_color: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            lives_remaining: match mode {
                PetMode::Mortal => STARTING_LIVES,
                PetMode::Immortal => 0,
            },
            avatar_seed: uuid::Uuid::new_v4().to_string(),
            alive: true,
            last_checked_date: None,
            avatar_kind,
            primary_color,
        }
    }
}

/// Result of a daily outcome evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum DailyOutcome {
    /// Nothing to evaluate: no pet, immortal or dead pet, the date was
    /// already processed, or yesterday has no record yet.
    Skipped,
    /// Goals were reached yesterday; no life lost.
    Safe,
    /// A life was lost and the pet survives.
    LifeLost { remaining: u8 },
    /// The last life was lost.
    Died,
}

/// Owner of the pet singleton and its lifecycle transitions.
#[derive(Debug, Clone, Default)]
pub struct PetManager {
    pet: Option<PetMeta>,
}

impl PetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the pet from the persistent store; corrupted data means no pet
    /// (the UI falls back to onboarding).
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let pet = store.get(keys::PET).and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| warn!(error = %e, "pet record corrupted, discarding"))
                .ok()
        });
        Self { pet }
    }

    /// Write the pet singleton (or its absence) to the persistent store.
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), crate::error::StorageError> {
        match &self.pet {
            Some(pet) => {
                let json = serde_json::to_string(pet).unwrap_or_else(|_| "null".to_string());
                store.set(keys::PET, &json)
            }
            None => store.remove(keys::PET),
        }
    }

    /// Current pet, if onboarded.
    pub fn pet(&self) -> Option<&PetMeta> {
        self.pet.as_ref()
    }

    /// Install a new pet (onboarding).
    pub fn create_pet(&mut self, pet: PetMeta) -> &PetMeta {
        self.pet = Some(pet);
        self.pet.as_ref().expect("pet just set")
    }

    /// Evaluate yesterday's outcome for a mortal pet.
    ///
    /// Re-running for an already-processed date is a silent no-op. A day
    /// with no record at all is not judged (and the guard is not stamped),
    /// so a fresh install is not penalized for pre-history and a later
    /// backfill can still be evaluated.
    pub fn check_daily_outcome(
        &mut self,
        history: &ProgressTracker,
        today: NaiveDate,
    ) -> DailyOutcome {
        let Some(pet) = self.pet.as_mut() else {
            return DailyOutcome::Skipped;
        };
        if pet.mode != PetMode::Mortal || !pet.alive {
            return DailyOutcome::Skipped;
        }
        let Some(yesterday) = today.pred_opt() else {
            return DailyOutcome::Skipped;
        };
        if pet.last_checked_date == Some(yesterday) {
            return DailyOutcome::Skipped;
        }
        let Some(day) = history.get_recorded(yesterday) else {
            return DailyOutcome::Skipped;
        };

        // The date counts as processed whether or not a life is lost.
        pet.last_checked_date = Some(yesterday);

        if day.goals_reached {
            return DailyOutcome::Safe;
        }

        pet.lives_remaining = pet.lives_remaining.saturating_sub(1);
        if pet.lives_remaining == 0 {
            pet.alive = false;
            DailyOutcome::Died
        } else {
            DailyOutcome::LifeLost {
                remaining: pet.lives_remaining,
            }
        }
    }

    /// Immediately end the pet (debug tooling).
    pub fn kill_pet(&mut self) {
        if let Some(pet) = self.pet.as_mut() {
            pet.lives_remaining = 0;
            pet.alive = false;
        }
    }

    /// Destroy the pet entirely, forcing re-onboarding.
    pub fn reset_pet(&mut self) {
        self.pet = None;
    }
}
