//! Shared CLI plumbing.

use activegotchi_core::storage::Config;
use activegotchi_core::{ActiveGotchi, CoreError, JsonFileStore, ResetMode, SystemClock};
use chrono::{NaiveDate, Utc};

pub type App = ActiveGotchi<JsonFileStore, SystemClock>;

/// Assemble the core over the on-disk store and the configured goals.
pub fn open_app() -> Result<App, CoreError> {
    let config = Config::load()?;
    let store = JsonFileStore::open()?;
    Ok(ActiveGotchi::new(store, SystemClock, config.goals))
}

/// Reset mode from the `--demo` flag, falling back to the config default.
pub fn reset_mode(demo_flag: bool) -> Result<ResetMode, Box<dyn std::error::Error>> {
    let demo = demo_flag || Config::load()?.demo_data_on_reset;
    Ok(if demo {
        ResetMode::Demo {
            seed: Utc::now().timestamp() as u64,
        }
    } else {
        ResetMode::Empty
    })
}

/// Parse a `yyyy-MM-dd` date argument.
pub fn parse_date(raw: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    Ok(raw.parse::<NaiveDate>()?)
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
