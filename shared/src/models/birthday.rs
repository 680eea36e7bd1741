//! Birthday Report Projection

use serde::{Deserialize, Serialize};

/// Row of the `v_birthdays` view - the derived projection behind the
/// monthly report. Read-only; the application never writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BirthdayRow {
    pub id: i64,
    pub name: String,
    pub birthdate: String,
    /// Day of month (1..=31), precomputed by the view.
    pub birth_day: i64,
    pub is_primary: bool,
    pub relation: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
