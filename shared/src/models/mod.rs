//! Data models
//!
//! Shared between registry-server and the admin client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod birthday;
pub mod member;

// Re-exports
pub use birthday::*;
pub use member::*;
