// ============================================================================
// Kominfo API - Navigation Menu Handlers
// File: crates/kominfo-api/src/handlers/menus.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use kominfo_core::domain::{MenuNode, NavigationMenu, NavigationMenuInput};

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/admin/menus - full tree, hidden items included
pub async fn tree(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<MenuNode>>>> {
    let tree = state.menus.admin_tree().await?;
    Ok(Json(ApiResponse::success(tree)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<ApiResponse<NavigationMenu>>> {
    let menu = state.menus.get(&id).await?;
    Ok(Json(ApiResponse::success(menu)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NavigationMenuInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<NavigationMenu>>)> {
    let menu = state.menus.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(menu))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<NavigationMenuInput>,
) -> ApiResult<Json<ApiResponse<NavigationMenu>>> {
    let menu = state.menus.update(&id, input).await?;
    Ok(Json(ApiResponse::success(menu)))
}

/// Sub-menus are removed with their parent.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<ApiResponse<()>>> {
    state.menus.delete(&id).await?;
    Ok(Json(ApiResponse::success(())))
}
