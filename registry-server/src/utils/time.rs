//! Time helpers
//!
//! Date parsing and report-month resolution live at the API handler layer;
//! the repository layer only sees validated values.

use chrono::{Datelike, NaiveDate};

use super::{AppError, AppResult};

/// Parse a calendar date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Current calendar month (1..=12) on the server clock
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}

/// Resolve a raw month query parameter.
///
/// Absent, non-numeric or out-of-range values silently fall back to the
/// current month rather than rejecting the request.
pub fn resolve_month(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m))
        .unwrap_or_else(current_month)
}
