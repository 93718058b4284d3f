//! Visitor counter and YouTube feed. Both answer the bare JSON shapes the
//! home page widgets read, without the envelope.

use axum::{extract::State, Json};

use kominfo_core::domain::{VisitorStats, YoutubeVideo};

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/visitor-stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<VisitorStats>> {
    Ok(Json(state.visitors.stats().await?))
}

/// POST /api/visitor-stats/hit
pub async fn hit(State(state): State<AppState>) -> ApiResult<Json<VisitorStats>> {
    state.visitors.record_visit().await?;
    Ok(Json(state.visitors.stats().await?))
}

/// GET /api/youtube
pub async fn youtube(State(state): State<AppState>) -> ApiResult<Json<Vec<YoutubeVideo>>> {
    Ok(Json(state.videos.latest().await?))
}
