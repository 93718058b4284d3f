// ============================================================================
// Kominfo API - Upload Handler
// File: crates/kominfo-api/src/handlers/uploads.rs
// ============================================================================

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use kominfo_core::domain::UploadedFile;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/admin/uploads/{bucket} - multipart form with a `file` field
pub async fn upload(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<ApiResponse<UploadedFile>>)> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
        file = Some((file_name, content_type, bytes.to_vec()));
    }

    let (file_name, content_type, bytes) = file.ok_or_else(|| ApiError::BadRequest("file: is required".into()))?;
    info!("Upload to {}: {} ({} bytes)", bucket, file_name, bytes.len());

    let uploaded = state
        .media
        .upload(&bucket, &file_name, content_type.as_deref(), bytes)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(uploaded))))
}
