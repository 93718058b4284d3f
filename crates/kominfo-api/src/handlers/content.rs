// ============================================================================
// Kominfo API - Content Handlers
// File: crates/kominfo-api/src/handlers/content.rs
// ============================================================================
//! Admin CRUD and public list endpoints shared by the flat content tables.
//! Each table is wired with the same handlers, picked by type.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use kominfo_core::domain::{
    AdminListQuery, Agenda, Announcement, ContentEntity, Document, Gallery, ListQuery, Pegawai, Post, ProgramDocument,
    ServiceItem,
};
use kominfo_core::services::{ContentService, ListingFilters};
use kominfo_shared::types::Page;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// A content table reachable from the router.
pub trait ContentResource: ContentEntity {
    fn service(state: &AppState) -> &ContentService<Self>;
}

impl ContentResource for Post {
    fn service(state: &AppState) -> &ContentService<Self> {
        state.posts.content()
    }
}

impl ContentResource for Announcement {
    fn service(state: &AppState) -> &ContentService<Self> {
        &state.announcements
    }
}

impl ContentResource for Agenda {
    fn service(state: &AppState) -> &ContentService<Self> {
        &state.agenda
    }
}

impl ContentResource for ServiceItem {
    fn service(state: &AppState) -> &ContentService<Self> {
        &state.services
    }
}

impl ContentResource for Gallery {
    fn service(state: &AppState) -> &ContentService<Self> {
        &state.galleries
    }
}

impl ContentResource for Document {
    fn service(state: &AppState) -> &ContentService<Self> {
        state.documents.content()
    }
}

impl ContentResource for ProgramDocument {
    fn service(state: &AppState) -> &ContentService<Self> {
        &state.program_documents
    }
}

impl ContentResource for Pegawai {
    fn service(state: &AppState) -> &ContentService<Self> {
        &state.pegawai
    }
}

// ----------------------------------------------------------------------------
// Admin
// ----------------------------------------------------------------------------

pub async fn admin_list<T>(
    State(state): State<AppState>,
    Query(query): Query<AdminListQuery>,
) -> ApiResult<Json<ApiResponse<Page<T>>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let page = T::service(&state).admin_list(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

pub async fn admin_get<T>(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<ApiResponse<T>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let entity = T::service(&state).get(&id).await?;
    Ok(Json(ApiResponse::success(entity)))
}

pub async fn create<T>(
    State(state): State<AppState>,
    Json(input): Json<T::Input>,
) -> ApiResult<(StatusCode, Json<ApiResponse<T>>)>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let created = T::service(&state).create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn update<T>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<T::Input>,
) -> ApiResult<Json<ApiResponse<T>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let updated = T::service(&state).update(&id, input).await?;
    Ok(Json(ApiResponse::success(updated)))
}

pub async fn delete<T>(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<ApiResponse<()>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    T::service(&state).delete(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// `/` and `/{id}` CRUD routes of one table, mounted under `/api/admin/{table}`.
pub fn admin_routes<T>() -> Router<AppState>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    Router::new()
        .route("/", get(admin_list::<T>).post(create::<T>))
        .route("/{id}", get(admin_get::<T>).put(update::<T>).delete(delete::<T>))
}

// ----------------------------------------------------------------------------
// Public
// ----------------------------------------------------------------------------

/// Published rows narrowed by `?search=&category=&year=&sort=&page=&per_page=`.
pub async fn public_list<T>(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Page<T>>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let page = T::service(&state).public_list(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

pub async fn public_filters<T>(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<ListingFilters>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let filters = T::service(&state).public_filters().await?;
    Ok(Json(ApiResponse::success(filters)))
}

pub async fn public_get<T>(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<ApiResponse<T>>>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    let entity = T::service(&state).public_get(&id).await?;
    Ok(Json(ApiResponse::success(entity)))
}

/// `/` list and `/filters` of one table; detail routes are added per table.
pub fn public_routes<T>() -> Router<AppState>
where
    T: ContentResource,
    T::Input: DeserializeOwned,
{
    Router::new()
        .route("/", get(public_list::<T>))
        .route("/filters", get(public_filters::<T>))
}
