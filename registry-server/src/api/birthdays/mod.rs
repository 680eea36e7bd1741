//! Birthday Report API module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    // A valid session is not enough: the endpoint itself checks the
    // allowlist instead of trusting the report page to do it.
    Router::new()
        .route("/api/birthdays", get(handler::list))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin))
}
