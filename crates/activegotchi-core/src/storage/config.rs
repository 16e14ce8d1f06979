//! TOML-based application configuration.
//!
//! Stores the daily activity goals the progress and mood rules are
//! evaluated against, plus data-handling preferences.
//!
//! Configuration is stored at `~/.config/activegotchi/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Daily activity goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    #[serde(default = "default_goal_steps")]
    pub steps: u32,
    /// Kilometers.
    #[serde(default = "default_goal_distance")]
    pub distance_km: f64,
    /// Hours. When unset, sleep adequacy is judged against 7 hours.
    #[serde(default = "default_goal_sleep")]
    pub sleep_hours: Option<f64>,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            steps: default_goal_steps(),
            distance_km: default_goal_distance(),
            sleep_hours: default_goal_sleep(),
        }
    }
}

impl DailyGoals {
    /// Sleep goal with the fallback applied.
    pub fn sleep_goal(&self) -> f64 {
        self.sleep_hours.unwrap_or(7.0)
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/activegotchi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub goals: DailyGoals,
    /// Seed demo history instead of starting empty when progress is reset.
    #[serde(default)]
    pub demo_data_on_reset: bool,
}

// Default functions
fn default_goal_steps() -> u32 {
    10_000
}
fn default_goal_distance() -> f64 {
    8.0
}
fn default_goal_sleep() -> Option<f64> {
    Some(7.5)
}

impl Config {
    /// Load configuration from disk, creating the default file if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/activegotchi"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let goals = DailyGoals::default();
        assert_eq!(goals.steps, 10_000);
        assert_eq!(goals.distance_km, 8.0);
        assert_eq!(goals.sleep_goal(), 7.5);
    }

    #[test]
    fn test_sleep_goal_falls_back_to_seven() {
        let goals = DailyGoals {
            sleep_hours: None,
            ..Default::default()
        };
        assert_eq!(goals.sleep_goal(), 7.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[goals]\nsteps = 12000\n").unwrap();
        assert_eq!(config.goals.steps, 12_000);
        assert_eq!(config.goals.distance_km, 8.0);
        assert!(!config.demo_data_on_reset);
    }
}
