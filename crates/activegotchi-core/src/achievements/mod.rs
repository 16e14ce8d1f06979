//! Achievement catalog, cumulative statistics, and unlock evaluation.

mod catalog;
mod engine;
mod stats;

pub use catalog::{
    default_achievements, merge_with_defaults, Achievement, Category, Condition, ConditionKind,
    Rarity,
};
pub use engine::{AchievementEngine, AchievementNotification};
pub use stats::UserStats;
