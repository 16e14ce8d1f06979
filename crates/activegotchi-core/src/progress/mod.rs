//! Daily progress records, streaks, and the weekly projection.

mod demo;
mod record;
mod store;
mod streak;
mod week;

pub use demo::demo_history;
pub use record::{goals_met, progress_percent, DayProgress, DayProgressUpdate, COMPLETION_THRESHOLD};
pub use store::ProgressTracker;
pub use streak::{calculate_streaks, StreakData};
pub use week::{build_week, WeeklyProgress};
