//! Registration API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Public route: the registration form submits without a session
    Router::new().route("/api/member", post(handler::register))
}
