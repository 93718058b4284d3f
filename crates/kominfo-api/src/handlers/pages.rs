// ============================================================================
// Kominfo API - Public HTML Pages
// File: crates/kominfo-api/src/handlers/pages.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use kominfo_core::domain::SiteSettings;
use kominfo_core::error::DomainError;

use super::accessibility::settings_from_headers;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::views::Chrome;

async fn chrome(state: &AppState, headers: &HeaderMap) -> ApiResult<(Chrome, SiteSettings)> {
    let (menus, settings) = tokio::try_join!(state.menus.header_tree(), state.settings.get())?;
    let a11y = settings_from_headers(headers);
    Ok((Chrome::new(&settings, menus, &a11y), settings))
}

/// Counting must never break the page.
async fn count_visit(state: &AppState) {
    if let Err(e) = state.visitors.record_visit().await {
        warn!("Failed to record visit: {}", e);
    }
}

fn render_error(e: handlebars::RenderError) -> ApiError {
    ApiError::Internal(format!("template render failed: {}", e))
}

fn not_found(state: &AppState, chrome: &Chrome) -> ApiResult<Response> {
    let html = state.views.not_found(chrome).map_err(render_error)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// GET /informasi/{slug}
pub async fn informasi(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let (chrome, _) = chrome(&state, &headers).await?;

    match state.informasi.public_page(&slug).await {
        Ok(page) => {
            count_visit(&state).await;
            let offset = state.posts.content().offset();
            let html = state
                .views
                .informasi_page(&chrome, &page, offset)
                .map_err(render_error)?;
            Ok(Html(html).into_response())
        }
        Err(DomainError::PageNotFound(_)) => not_found(&state, &chrome),
        Err(e) => Err(e.into()),
    }
}

/// GET /kontak
pub async fn kontak(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    let (chrome, settings) = chrome(&state, &headers).await?;
    count_visit(&state).await;

    let html = state.views.kontak(&chrome, &settings).map_err(render_error)?;
    Ok(Html(html).into_response())
}

/// Unknown paths: JSON under `/api`, the HTML not-found page elsewhere.
pub async fn fallback(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> ApiResult<Response> {
    if uri.path().starts_with("/api/") {
        return Err(ApiError::NotFound(format!("no route for {}", uri.path())));
    }
    let (chrome, _) = chrome(&state, &headers).await?;
    not_found(&state, &chrome)
}
