// ============================================================================
// Kominfo API - Informasi Page Admin Handlers
// File: crates/kominfo-api/src/handlers/informasi.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use kominfo_core::domain::{InformasiPage, InformasiPageInput, InformasiSync};
use kominfo_core::services::PageEditor;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/admin/informasi - menu links and pages side by side
pub async fn overview(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<InformasiSync>>> {
    let sync = state.informasi.overview().await?;
    Ok(Json(ApiResponse::success(sync)))
}

/// GET /api/admin/informasi/{slug}
///
/// Pages not linked from the Informasi menu answer 403 and the editor
/// sends the admin back to the overview.
pub async fn editor(State(state): State<AppState>, Path(slug): Path<String>) -> ApiResult<Json<ApiResponse<PageEditor>>> {
    let editor = state.informasi.page_for_edit(&slug).await?;
    Ok(Json(ApiResponse::success(editor)))
}

/// PUT /api/admin/informasi/{slug}
pub async fn save(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<InformasiPageInput>,
) -> ApiResult<Json<ApiResponse<InformasiPage>>> {
    let page = state.informasi.save(&slug, input).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// DELETE /api/admin/informasi/pages/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<ApiResponse<()>>> {
    state.informasi.delete(&id).await?;
    Ok(Json(ApiResponse::success(())))
}
