//! Week date derivation
//!
//! Filling in day names and dates from a selected start-of-week date. Only
//! the `day` and `date` fields of each block are rewritten; events, colors
//! and guest annotations survive derivation untouched.

use crate::domain::config::DayBlock;
use crate::error::{FlierError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Display order of day names, assigned positionally to slots 0..6.
/// Derivation assumes the start date has already been snapped to a Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// Snap a date back to the Sunday that starts its week (identity on Sundays)
pub fn snap_to_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Short date label: 1-indexed month and day, no leading zeros, no year
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Parse a week-start date in YYYY-MM-DD form
pub fn parse_week_start(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| FlierError::InvalidDate(input.to_string()))
}

/// Rewrite day names and dates for the week starting at `start`, preserving
/// every other field of the input blocks at the same index.
pub fn derive_week(start: NaiveDate, days: &[DayBlock]) -> Vec<DayBlock> {
    days.iter()
        .enumerate()
        .map(|(i, block)| {
            let mut derived = block.clone();
            derived.day = WEEKDAY_NAMES[i % WEEKDAY_NAMES.len()].to_string();
            derived.date = short_date(start + Duration::days(i as i64));
            derived
        })
        .collect()
}
