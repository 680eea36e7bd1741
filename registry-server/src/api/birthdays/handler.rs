//! Birthday Report Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::client::BirthdaysResponse;

use crate::core::ServerState;
use crate::db::repository::birthday;
use crate::utils::{AppResult, time};

/// Raw query string. The month is parsed by hand so junk values can fall
/// back to the current month instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub month: Option<String>,
}

/// GET /api/birthdays?month=M - one birth month's rows, day ascending
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<BirthdaysResponse>> {
    let month = time::resolve_month(query.month.as_deref());
    let items = birthday::find_by_month(&state.pool, month).await?;
    Ok(Json(BirthdaysResponse { items }))
}
