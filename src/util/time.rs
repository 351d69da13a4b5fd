//! Calendar-window calculations.
//!
//! Dashboard growth metrics compare row counts between the current and previous
//! calendar month, so the month boundaries have to be computed consistently in
//! one place.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::error::Error;

/// Midnight on the first day of the month containing `today`.
pub fn month_start(today: NaiveDate) -> Result<NaiveDateTime, Error> {
    let first = today.with_day0(0).ok_or_else(|| {
        Error::ParseError(format!("Failed to compute month start for {}", today))
    })?;

    first.and_hms_opt(0, 0, 0).ok_or_else(|| {
        Error::ParseError(format!("Failed to compute month start timestamp for {}", today))
    })
}

/// Midnight on the first day of the month before the one containing `today`.
pub fn previous_month_start(today: NaiveDate) -> Result<NaiveDateTime, Error> {
    let first = today.with_day0(0).ok_or_else(|| {
        Error::ParseError(format!("Failed to compute month start for {}", today))
    })?;

    let last_of_previous = first.checked_sub_days(Days::new(1)).ok_or_else(|| {
        Error::ParseError(format!("Failed to step back a month from {}", today))
    })?;

    month_start(last_of_previous)
}
