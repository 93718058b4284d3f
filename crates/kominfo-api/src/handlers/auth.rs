// ============================================================================
// Kominfo API - Auth Handlers
// File: crates/kominfo-api/src/handlers/auth.rs
// ============================================================================
//! Admin sign-in and current-account lookup

use axum::{extract::State, Extension, Json};

use kominfo_core::domain::{AdminUser, LoginRequest, LoginResponse};
use kominfo_security::Claims;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let response = state.auth.login(payload).await?;
    Ok(Json(ApiResponse::success(response)))
}

/// GET /api/admin/me
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<ApiResponse<AdminUser>>> {
    let user_id = claims
        .user_id()
        .map_err(|_| ApiError::Unauthorized("invalid token subject".into()))?;
    let user = state.auth.me(&user_id).await?;
    Ok(Json(ApiResponse::success(user)))
}
