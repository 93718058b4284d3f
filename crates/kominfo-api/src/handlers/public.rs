// ============================================================================
// Kominfo API - Public Endpoints
// File: crates/kominfo-api/src/handlers/public.rs
// ============================================================================
//! Read-only endpoints of the public site that need more than a plain list

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use kominfo_core::domain::{AgendaDay, ListQuery, MenuNode, Post, ProgramDocument, SiteSettings};
use kominfo_core::services::PublicPage;
use kominfo_shared::types::Page;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/menus
pub async fn header_menu(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<MenuNode>>>> {
    let tree = state.menus.header_tree().await?;
    Ok(Json(ApiResponse::success(tree)))
}

/// GET /api/posts/{slug}
pub async fn post_by_slug(State(state): State<AppState>, Path(slug): Path<String>) -> ApiResult<Json<ApiResponse<Post>>> {
    let post = state.posts.read_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(post)))
}

#[derive(Debug, Deserialize)]
pub struct AgendaQuery {
    /// `YYYY-MM`
    pub month: Option<String>,
}

fn parse_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// GET /api/agenda?month=YYYY-MM
pub async fn agenda_by_day(
    State(state): State<AppState>,
    Query(query): Query<AgendaQuery>,
) -> ApiResult<Json<ApiResponse<Vec<AgendaDay>>>> {
    let month = match query.month.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(raw) => Some(parse_month(raw).ok_or_else(|| ApiError::BadRequest("month: expected YYYY-MM".into()))?),
        None => None,
    };
    let days = state.agenda.agenda_by_day(month).await?;
    Ok(Json(ApiResponse::success(days)))
}

/// GET /api/program/{program}/documents
pub async fn program_documents(
    State(state): State<AppState>,
    Path(program): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Page<ProgramDocument>>>> {
    let page = state.program_documents.by_program(&program, &query).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// GET /api/documents/{id}/download
pub async fn download_document(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Redirect> {
    let url = state.documents.download(&id).await?;
    Ok(Redirect::temporary(&url))
}

/// GET /api/settings
pub async fn site_settings(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<SiteSettings>>> {
    let settings = state.settings.get().await?;
    Ok(Json(ApiResponse::success(settings)))
}

/// GET /api/informasi/{slug}
pub async fn informasi_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ApiResponse<PublicPage>>> {
    let page = state.informasi.public_page(&slug).await?;
    Ok(Json(ApiResponse::success(page)))
}
