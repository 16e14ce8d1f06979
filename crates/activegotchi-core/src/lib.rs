//! # ActiveGotchi Core Library
//!
//! This library provides the core business logic for ActiveGotchi, a
//! virtual pet whose mood, lives, and survival depend on the user's daily
//! step and distance activity. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary, with any GUI
//! being a thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Progress tracking**: date-keyed daily records with streak and
//!   weekly-view derivations
//! - **Pet lifecycle**: the mortal-mode life-decrement state machine,
//!   idempotent per calendar day
//! - **Achievements**: a fixed catalog evaluated along two separate paths
//!   (cumulative stats and raw daily readings) with a notification queue
//! - **Storage**: an injected key-value boundary with JSON-file and
//!   in-memory implementations, plus TOML-based configuration
//!
//! All state mutations are synchronous and driven by discrete triggers (a
//! periodic health poll, a user tap, an app-foreground tick); there is no
//! internal concurrency. Idempotency guards take the place of locking.
//!
//! ## Key Components
//!
//! - [`ActiveGotchi`]: the assembled facade the presentation layer talks to
//! - [`ProgressTracker`]: daily record collection
//! - [`PetManager`]: pet identity and lifecycle transitions
//! - [`AchievementEngine`]: unlock evaluation and notifications
//! - [`Clock`] / [`KeyValueStore`] / [`HealthDataSource`]: injected
//!   boundaries, each with test-friendly implementations

pub mod achievements;
pub mod app;
pub mod clock;
pub mod error;
pub mod events;
pub mod health;
pub mod mood;
pub mod pet;
pub mod progress;
pub mod storage;

pub use achievements::{Achievement, AchievementEngine, AchievementNotification, UserStats};
pub use app::{ActiveGotchi, ResetMode};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use health::{HealthDataSource, HealthSnapshot, MockHealthSource};
pub use mood::{derive_mood, Mood};
pub use pet::{AvatarKind, DailyOutcome, PetManager, PetMeta, PetMode, STARTING_LIVES};
pub use progress::{DayProgress, DayProgressUpdate, ProgressTracker, StreakData, WeeklyProgress};
pub use storage::{Config, DailyGoals, JsonFileStore, KeyValueStore, MemoryStore};
