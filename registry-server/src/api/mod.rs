//! API route modules
//!
//! # Structure
//!
//! - [`members`] - public registration endpoint
//! - [`birthdays`] - admin birthday report query
//! - [`auth`] - login and session endpoints
//! - [`health`] - liveness probe

pub mod auth;
pub mod birthdays;
pub mod health;
pub mod members;

// Re-export common types for handlers
pub use crate::utils::AppResult;
