//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.
//! These types are shared between registry-server and registry-client.

use serde::{Deserialize, Serialize};

use crate::models::{BirthdayRow, FamilySubmission, PrimarySubmission};

// =============================================================================
// Registration API DTOs
// =============================================================================

/// Registration request body (`POST /api/member`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub primary: PrimarySubmission,
    #[serde(default)]
    pub family: Vec<FamilySubmission>,
}

/// Registration response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub ok: bool,
}

// =============================================================================
// Report API DTOs
// =============================================================================

/// Birthday report response body (`GET /api/birthdays`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdaysResponse {
    pub items: Vec<BirthdayRow>,
}

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated admin identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
}

// =============================================================================
// Error body
// =============================================================================

/// Error body returned by every failing endpoint: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
