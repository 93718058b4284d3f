use std::collections::HashMap;

use axum::{extract::State, Json};

use kominfo_core::domain::SiteSettings;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/admin/settings
pub async fn get(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<SiteSettings>>> {
    let settings = state.settings.get().await?;
    Ok(Json(ApiResponse::success(settings)))
}

/// PUT /api/admin/settings - partial `{key: value}` map, all keys validated first
pub async fn update(
    State(state): State<AppState>,
    Json(changes): Json<HashMap<String, String>>,
) -> ApiResult<Json<ApiResponse<SiteSettings>>> {
    let settings = state.settings.update(changes).await?;
    Ok(Json(ApiResponse::success(settings)))
}
