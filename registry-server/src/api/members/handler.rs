//! Registration Handlers

use axum::{Json, extract::State};

use shared::client::{RegisterRequest, RegisterResponse};
use shared::models::PrimarySubmission;

use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_DATE_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, validate_required_text,
};
use crate::utils::{AppResult, time};

/// POST /api/member - upsert a primary member and replace their family list
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    let primary = normalize_primary(&payload.primary)?;

    let primary_id = member::register(&state.pool, &primary, &payload.family).await?;

    tracing::info!(
        primary_id,
        submitted_family = payload.family.len(),
        "Registration stored"
    );

    Ok(Json(RegisterResponse { ok: true }))
}

/// Trim and validate the primary fields. All four are required; nothing is
/// written when any of them is missing.
fn normalize_primary(raw: &PrimarySubmission) -> AppResult<PrimarySubmission> {
    validate_required_text(&raw.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&raw.birthdate, "birthdate", MAX_DATE_LEN)?;
    validate_required_text(&raw.phone, "phone", MAX_PHONE_LEN)?;
    validate_required_text(&raw.address, "address", MAX_ADDRESS_LEN)?;

    // The store keys primaries on (phone, birthdate); a malformed date
    // would also silently fall out of the birthday view.
    time::parse_date(raw.birthdate.trim())?;

    Ok(PrimarySubmission {
        name: raw.name.trim().to_string(),
        birthdate: raw.birthdate.trim().to_string(),
        phone: raw.phone.trim().to_string(),
        address: raw.address.trim().to_string(),
    })
}
