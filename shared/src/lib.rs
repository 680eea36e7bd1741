//! Shared types for the member registry
//!
//! Common types used by both registry-server and the admin client:
//! domain models, wire DTOs and small utilities.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
