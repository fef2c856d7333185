//! Date helpers.

use chrono::{Local, NaiveDate};

/// Calendar date in the client's local time zone.
pub type LocalDate = NaiveDate;

/// Return today's date in the local time zone.
#[must_use]
pub fn today() -> LocalDate {
    Local::now().date_naive()
}

/// Format a date the way action records display it (`2026-10-19`).
#[must_use]
pub fn format_date(date: LocalDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
