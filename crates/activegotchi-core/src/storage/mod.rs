//! Persistence boundary.
//!
//! The core treats durable storage as an external key-value store with
//! `get`/`set`/`remove` semantics. Two implementations are provided: a
//! JSON-file-backed store for the application and an in-memory store for
//! tests. Writes are best-effort; callers log and continue on failure.

mod config;
pub mod file;
pub mod memory;

pub use config::{Config, DailyGoals};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Storage keys used by the core.
pub mod keys {
    /// Date-keyed progress record collection.
    pub const PROGRESS: &str = "activegotchi-progress";
    /// Pet identity singleton.
    pub const PET: &str = "activegotchi-pet";
    /// Legacy pet-name key; its presence gates onboarding in the UI.
    pub const PET_NAME: &str = "activegotchi-pet-name";
    /// Achievement catalog with unlock state.
    pub const ACHIEVEMENTS: &str = "activegotchi-achievements";
    /// Cumulative user statistics.
    pub const USER_STATS: &str = "activegotchi-user-stats";
    /// Achievement notification queue.
    pub const NOTIFICATIONS: &str = "activegotchi-achievement-notifications";
}

/// Durable key-value storage surviving process restart.
///
/// Values are serialized strings; conversion between native collections and
/// their serialized form happens explicitly at this boundary.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/activegotchi[-dev]/` based on ACTIVEGOTCHI_ENV.
///
/// Set ACTIVEGOTCHI_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ACTIVEGOTCHI_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("activegotchi-dev")
    } else {
        base_dir.join("activegotchi")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDirUnavailable(e.to_string()))?;
    Ok(dir)
}
