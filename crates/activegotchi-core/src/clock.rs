//! Injectable time source.
//!
//! Every "today"/"yesterday" comparison in the crate goes through [`Clock`]
//! so that tests can pin the calendar with [`FixedClock`] instead of racing
//! midnight rollovers.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current date and time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// The calendar date before today.
    fn yesterday(&self) -> NaiveDate {
        self.today().pred_opt().unwrap_or_else(|| self.today())
    }
}

/// Wall-clock implementation used by the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to midnight of the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(0, 0, 0).expect("valid time").and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.yesterday(), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }
}
