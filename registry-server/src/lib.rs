//! Member Registry Server
//!
//! HTTP service behind the church membership registration form and the
//! monthly birthday report.
//!
//! # Module structure
//!
//! ```text
//! registry-server/src/
//! ├── core/          # configuration, state, server
//! ├── auth/          # JWT sessions, admin allowlist
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer (pool, migrations, repositories)
//! └── utils/         # errors, logging, validation, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{Allowlist, CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
