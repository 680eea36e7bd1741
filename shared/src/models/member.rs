//! Member Model

use serde::{Deserialize, Serialize};

/// Member entity - one row per registered person.
///
/// A primary member owns its own phone and address and may have family
/// rows pointing back at it via `parent_id`. Family rows carry a relation
/// label instead and are never independently addressable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub is_primary: bool,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`, no time component.
    pub birthdate: String,
    pub relation: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub parent_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Primary member fields as submitted by the registration form.
///
/// Fields default to empty strings so a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimarySubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Family member fields as submitted by the registration form.
///
/// Entries missing name or birthdate are dropped during registration,
/// not rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub relation: Option<String>,
}
