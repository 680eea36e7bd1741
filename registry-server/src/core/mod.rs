//! Core module - server configuration, state and the HTTP server
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared request-handler state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, ConfigError};
pub use server::{Server, build_app, build_router};
pub use state::ServerState;
