//! JSON-file-backed key-value store.
//!
//! All keys live in a single JSON object on disk, the desktop analogue of
//! the browser's `localStorage`. The file is rewritten on every mutation;
//! a corrupted or unreadable file degrades to an empty store rather than
//! failing the application.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{data_dir, KeyValueStore};
use crate::error::StorageError;

/// Store file name inside the data directory.
const STORE_FILE: &str = "store.json";

/// Durable store persisting a flat key-value map as one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create) the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join(STORE_FILE);
        Self::open_at(path)
    }

    /// Open (or create) the store at an explicit path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "store file corrupted, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StorageError::OpenFailed {
                    path,
                    message: e.to_string(),
                })
            }
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush().map_err(|e| StorageError::RemoveFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}
