//! Core error types for activegotchi-core.
//!
//! Absent data is never an error in this crate: missing day records, a
//! missing pet, or missing stats all fall back to well-defined defaults.
//! The errors below cover the paths that can legitimately fail, which is
//! storage I/O and configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error for callers assembling the core over real storage and
/// configuration, converted from the leaf errors via `?`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing file
    #[error("Failed to open store at {path}: {message}")]
    OpenFailed { path: PathBuf, message: String },

    /// Failed to write a key
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Failed to remove a key
    #[error("Failed to remove key '{key}': {message}")]
    RemoveFailed { key: String, message: String },

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_errors_convert_into_core_error() {
        let storage: CoreError = StorageError::DataDirUnavailable("no home".to_string()).into();
        assert!(storage.to_string().starts_with("Storage error:"));

        let config: CoreError = ConfigError::ParseFailed("bad toml".to_string()).into();
        assert!(config.to_string().starts_with("Configuration error:"));
    }
}
