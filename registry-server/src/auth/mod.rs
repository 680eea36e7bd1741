//! Authentication - JWT sessions and the admin allowlist
//!
//! - [`jwt`] - token issue/validate, [`CurrentUser`] context
//! - [`allowlist`] - static set of report-admin emails
//! - [`middleware`] - axum middleware for both

pub mod allowlist;
pub mod jwt;
pub mod middleware;

pub use allowlist::Allowlist;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
