//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::StorageError;

/// Non-durable store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// When set, every write fails. Used to exercise degraded-durability paths.
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make all subsequent writes fail.
    pub fn with_failing_writes() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "writes disabled".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::RemoveFailed {
                key: key.to_string(),
                message: "writes disabled".to_string(),
            });
        }
        self.entries.remove(key);
        Ok(())
    }
}
