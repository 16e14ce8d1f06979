//! Application facade: the presentation-facing API.
//!
//! [`ActiveGotchi`] wires the progress tracker, pet manager, and
//! achievement engine over one injected store and clock, and is what the
//! UI layer talks to. All mutations are synchronous and idempotency-guarded
//! where a calendar date must only be judged once; persistence is
//! best-effort, a failed write
//! is logged and execution continues on in-memory state.

use chrono::NaiveDate;
use tracing::warn;

use crate::achievements::{Achievement, AchievementEngine, AchievementNotification, UserStats};
use crate::clock::Clock;
use crate::events::Event;
use crate::health::HealthSnapshot;
use crate::mood::{derive_mood, Mood};
use crate::pet::{AvatarKind, DailyOutcome, PetManager, PetMeta, PetMode};
use crate::progress::{
    build_week, calculate_streaks, demo_history, DayProgress, DayProgressUpdate, ProgressTracker,
    StreakData, WeeklyProgress,
};
use crate::storage::{keys, DailyGoals, KeyValueStore};

/// What a reset leaves behind in the progress history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// Start with no history.
    Empty,
    /// Seed three weeks of generated demo history.
    Demo { seed: u64 },
}

/// The assembled core. One instance per installation; tests build isolated
/// instances over a [`MemoryStore`](crate::storage::MemoryStore) and a
/// fixed clock.
pub struct ActiveGotchi<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    goals: DailyGoals,
    progress: ProgressTracker,
    pet: PetManager,
    achievements: AchievementEngine,
    events: Vec<Event>,
    last_mood: Option<Mood>,
}

impl<S: KeyValueStore, C: Clock> ActiveGotchi<S, C> {
    /// Assemble the core, loading all persisted state from `store`.
    pub fn new(store: S, clock: C, goals: DailyGoals) -> Self {
        let progress = ProgressTracker::load(&store);
        let pet = PetManager::load(&store);
        let achievements = AchievementEngine::load(&store);
        Self {
            store,
            clock,
            goals,
            progress,
            pet,
            achievements,
            events: Vec::new(),
            last_mood: None,
        }
    }

    /// The configured daily goals.
    pub fn goals(&self) -> &DailyGoals {
        &self.goals
    }

    // --- progress ---

    /// Merge a partial update onto the record for `date`.
    pub fn update_day_progress(&mut self, date: NaiveDate, update: &DayProgressUpdate) -> DayProgress {
        let goals_before = self.progress.get(date).goals_reached;
        let day = self.progress.upsert(date, update).clone();

        let at = self.clock.now();
        self.events.push(Event::ProgressUpdated {
            date,
            progress: day.progress,
            completed: day.completed,
            at,
        });
        if day.goals_reached && !goals_before {
            self.events.push(Event::GoalsReached { date, at });
        }

        self.persist_progress();
        day
    }

    /// Fold a live health reading into today's record (the periodic poll).
    pub fn sync_today(&mut self, snapshot: &HealthSnapshot) -> DayProgress {
        let update =
            DayProgressUpdate::from_reading(snapshot.steps, snapshot.distance_km, &self.goals);
        self.update_day_progress(self.clock.today(), &update)
    }

    /// Record for a date, zero-record if absent.
    pub fn day_progress(&self, date: NaiveDate) -> DayProgress {
        self.progress.get(date)
    }

    /// Today's record according to the injected clock.
    pub fn today_progress(&self) -> DayProgress {
        self.progress.get(self.clock.today())
    }

    /// This week's Monday-to-Sunday projection.
    pub fn current_week(&self) -> WeeklyProgress {
        build_week(self.progress.days(), self.clock.today())
    }

    /// Current and longest streaks from the history.
    pub fn streaks(&self) -> StreakData {
        calculate_streaks(self.progress.days(), self.clock.today())
    }

    /// Days on record whose averaged progress reached the threshold.
    pub fn total_days_completed(&self) -> usize {
        self.progress.total_days_completed()
    }

    /// Drop the history, optionally reseeding demo data.
    pub fn reset_progress(&mut self, mode: ResetMode) {
        let replacement = match mode {
            ResetMode::Empty => None,
            ResetMode::Demo { seed } => {
                Some(demo_history(self.clock.today(), &self.goals, seed))
            }
        };
        self.progress.reset(replacement);
        let at = self.clock.now();
        self.events.push(Event::ProgressReset { at });
        self.persist_progress();
    }

    /// Streak-tiered encouragement line for the UI.
    pub fn motivational_message(&self) -> String {
        match self.streaks().current {
            0 => "Start your fitness journey today!".to_string(),
            1 => "Great start! Keep the momentum going!".to_string(),
            n if n < 7 => format!("{n} days strong! You're building a habit!"),
            n if n < 21 => format!("{n} day streak! You're on fire!"),
            n => format!("{n} days! You're a fitness legend!"),
        }
    }

    // --- pet ---

    /// Onboard a new pet.
    pub fn create_pet(
        &mut self,
        name: impl Into<String>,
        mode: PetMode,
        avatar_kind: Option<AvatarKind>,
        primary_color: Option<String>,
    ) -> PetMeta {
        let pet = self.pet.create_pet(PetMeta::new(name, mode, avatar_kind, primary_color)).clone();
        if let Err(e) = self.store.set(keys::PET_NAME, &pet.name) {
            warn!(error = %e, "failed to persist pet name key");
        }
        self.events.push(Event::PetCreated {
            name: pet.name.clone(),
            mode: pet.mode,
            at: self.clock.now(),
        });
        self.persist_pet();
        pet
    }

    /// Current pet, if onboarded.
    pub fn pet(&self) -> Option<&PetMeta> {
        self.pet.pet()
    }

    /// Evaluate yesterday's outcome for a mortal pet. Safe to call any
    /// number of times per day; only the first evaluation of a date has an
    /// effect.
    pub fn check_daily_outcome(&mut self) -> DailyOutcome {
        let today = self.clock.today();
        let outcome = self.pet.check_daily_outcome(&self.progress, today);

        match outcome {
            DailyOutcome::Skipped => return outcome,
            DailyOutcome::Safe => {}
            DailyOutcome::LifeLost { remaining } => {
                if let Some(date) = today.pred_opt() {
                    self.events.push(Event::LifeLost {
                        date,
                        remaining,
                        at: self.clock.now(),
                    });
                }
            }
            DailyOutcome::Died => self.on_pet_death(),
        }

        self.persist_pet();
        outcome
    }

    /// Immediately end the pet (debug tooling).
    pub fn kill_pet(&mut self) {
        if self.pet.pet().is_none() {
            return;
        }
        self.pet.kill_pet();
        self.on_pet_death();
        self.persist_pet();
    }

    /// Destroy the pet and its progress history, forcing re-onboarding.
    /// Nothing from the previous pet's lifecycle survives.
    pub fn reset_pet(&mut self, mode: ResetMode) {
        self.pet.reset_pet();
        self.remove_pet_name_key();
        self.persist_pet();
        self.reset_progress(mode);
    }

    /// Full app reset: pet, history, achievements, stats, notifications.
    pub fn reset_all(&mut self, mode: ResetMode) {
        self.reset_pet(mode);
        self.achievements.reset();
        self.persist_achievements();
    }

    fn on_pet_death(&mut self) {
        let name = self
            .pet
            .pet()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        // Dropping the name key is what sends the UI back to onboarding.
        self.remove_pet_name_key();
        self.events.push(Event::PetDied {
            name,
            at: self.clock.now(),
        });
    }

    fn remove_pet_name_key(&mut self) {
        if let Err(e) = self.store.remove(keys::PET_NAME) {
            warn!(error = %e, "failed to remove pet name key");
        }
    }

    // --- mood ---

    /// Derive the mood from a live reading, emitting a `MoodChanged` event
    /// when it differs from the last observed mood.
    pub fn observe_mood(&mut self, snapshot: &HealthSnapshot) -> Mood {
        let mood = derive_mood(snapshot, &self.goals);
        if self.last_mood != Some(mood) {
            self.last_mood = Some(mood);
            self.events.push(Event::MoodChanged {
                mood,
                at: self.clock.now(),
            });
        }
        mood
    }

    // --- achievements ---

    /// One pet tap. Returns achievements newly unlocked by this call.
    pub fn track_pet_tap(&mut self) -> Vec<Achievement> {
        let unlocked = self.achievements.track_pet_tap(self.clock.now());
        self.after_achievement_pass(unlocked)
    }

    /// One pirouette. Returns achievements newly unlocked by this call.
    pub fn track_pirouette(&mut self) -> Vec<Achievement> {
        let unlocked = self.achievements.track_pirouette(self.clock.now());
        self.after_achievement_pass(unlocked)
    }

    /// Fold a day's reading into the cumulative stats.
    pub fn track_daily_progress(
        &mut self,
        steps: u32,
        distance: f64,
        goal_achieved: bool,
    ) -> Vec<Achievement> {
        let unlocked = self.achievements.track_daily_progress(
            steps,
            distance,
            goal_achieved,
            self.clock.today(),
            self.clock.now(),
        );
        self.after_achievement_pass(unlocked)
    }

    /// Grade the daily-condition achievements against a raw reading.
    pub fn check_daily_achievements(&mut self, steps: u32, distance: f64) -> Vec<Achievement> {
        let unlocked = self
            .achievements
            .check_daily_achievements(steps, distance, self.clock.now());
        self.after_achievement_pass(unlocked)
    }

    fn after_achievement_pass(&mut self, unlocked: Vec<Achievement>) -> Vec<Achievement> {
        let at = self.clock.now();
        for achievement in &unlocked {
            self.events.push(Event::AchievementUnlocked {
                id: achievement.id.clone(),
                title: achievement.title.clone(),
                at,
            });
        }
        self.persist_achievements();
        unlocked
    }

    /// Full catalog with current unlock state.
    pub fn achievements(&self) -> &[Achievement] {
        self.achievements.achievements()
    }

    /// Cumulative statistics.
    pub fn stats(&self) -> &UserStats {
        self.achievements.stats()
    }

    /// Notifications not yet shown, oldest first.
    pub fn unseen_notifications(&self) -> Vec<AchievementNotification> {
        self.achievements
            .unseen_notifications()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Batch-acknowledge the notification queue.
    pub fn mark_notifications_seen(&mut self) {
        self.achievements.mark_notifications_seen();
        self.persist_achievements();
    }

    // --- events ---

    /// Take all pending events. The presentation layer polls this.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Tear down the facade and hand back the store, e.g. to rebuild on a
    /// later day.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- persistence (best-effort) ---

    fn persist_progress(&mut self) {
        if let Err(e) = self.progress.persist(&mut self.store) {
            warn!(error = %e, "progress write failed, continuing in memory");
        }
    }

    fn persist_pet(&mut self) {
        if let Err(e) = self.pet.persist(&mut self.store) {
            warn!(error = %e, "pet write failed, continuing in memory");
        }
    }

    fn persist_achievements(&mut self) {
        if let Err(e) = self.achievements.persist(&mut self.store) {
            warn!(error = %e, "achievement write failed, continuing in memory");
        }
    }
}
