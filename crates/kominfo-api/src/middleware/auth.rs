// ============================================================================
// Kominfo API - Bearer Token Guard
// File: crates/kominfo-api/src/middleware/auth.rs
// ============================================================================

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Guards `/api/admin/*`. Valid tokens leave their `Claims` in the request
/// extensions for the handlers.
pub async fn require_admin(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, ApiError> {
    let token = bearer_token(&req).ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?;
    let claims = state.auth.authenticate(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
