//! Injectable source of "today".
//!
//! All date stamping (`created_date`, `logged_date`, `date_paid`) goes
//! through a [`Clock`] so hosts and tests can pin the current date instead
//! of depending on the wall clock.

use chrono::{NaiveDate, Utc};

/// Where the store gets the current calendar date from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    /// Follow the system clock (UTC calendar date).
    System,
    /// Always report a fixed date.
    Fixed(NaiveDate),
}

impl Clock {
    /// The current calendar date, with no time component.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::System => Utc::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_fixed_clock_reports_fixed_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(Clock::Fixed(date).today(), date);
    }
}
