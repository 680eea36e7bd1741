//! Authentication Handlers
//!
//! Login, session echo and logout.

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - email + password, returns a session token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let account = admin_user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay before inspecting the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent account enumeration
    let account = match account {
        Some(a) => a,
        None => {
            tracing::warn!(target: "security", email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    if !account.verify_password(&req.password)? {
        tracing::warn!(target: "security", email = %account.email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    // A valid credential outside the allowlist gets no session at all
    if !state.allowlist.contains(&account.email) {
        tracing::warn!(target: "security", email = %account.email, "Login refused - not on allowlist");
        return Err(AppError::forbidden("Not authorized to view the report"));
    }

    let token = state
        .jwt_service
        .generate_token(&account.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %account.email, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            email: account.email,
        },
    }))
}

/// GET /api/auth/me - echo the authenticated session identity
pub async fn me(Extension(user): Extension<CurrentUser>) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo { email: user.email }))
}

/// POST /api/auth/logout - stateless acknowledgment; tokens are not revoked
pub async fn logout(Extension(user): Extension<CurrentUser>) -> AppResult<Json<()>> {
    tracing::info!(email = %user.email, "Admin logged out");
    Ok(Json(()))
}
