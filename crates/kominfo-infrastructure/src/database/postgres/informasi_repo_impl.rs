// ============================================================================
// Kominfo Infrastructure - PostgreSQL Informasi Page Repository
// File: crates/kominfo-infrastructure/src/database/postgres/informasi_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use kominfo_core::domain::InformasiPage;
use kominfo_core::error::DomainError;
use kominfo_core::repositories::InformasiPageRepository;

use super::db_error;

pub struct PgInformasiPageRepository {
    pool: PgPool,
}

impl PgInformasiPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InformasiPageRow {
    id: Uuid,
    slug: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<InformasiPageRow> for InformasiPage {
    fn from(row: InformasiPageRow) -> Self {
        InformasiPage {
            id: row.id,
            slug: row.slug,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl InformasiPageRepository for PgInformasiPageRepository {
    async fn list_all(&self) -> Result<Vec<InformasiPage>, DomainError> {
        let rows: Vec<InformasiPageRow> = sqlx::query_as(
            r#"
            SELECT id, slug, title, content, created_at, updated_at
            FROM informasi_pages
            ORDER BY slug ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing informasi pages", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<InformasiPage>, DomainError> {
        let row: Option<InformasiPageRow> = sqlx::query_as(
            "SELECT id, slug, title, content, created_at, updated_at FROM informasi_pages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding informasi page by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<InformasiPage>, DomainError> {
        let row: Option<InformasiPageRow> = sqlx::query_as(
            "SELECT id, slug, title, content, created_at, updated_at FROM informasi_pages WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding informasi page by slug", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, page: &InformasiPage) -> Result<InformasiPage, DomainError> {
        let row: InformasiPageRow = sqlx::query_as(
            r#"
            INSERT INTO informasi_pages (id, slug, title, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, slug, title, content, created_at, updated_at
            "#,
        )
        .bind(page.id)
        .bind(&page.slug)
        .bind(&page.title)
        .bind(&page.content)
        .bind(page.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating informasi page", e))?;

        Ok(row.into())
    }

    async fn update(&self, page: &InformasiPage) -> Result<InformasiPage, DomainError> {
        let row: Option<InformasiPageRow> = sqlx::query_as(
            r#"
            UPDATE informasi_pages
            SET title = $2, content = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, slug, title, content, created_at, updated_at
            "#,
        )
        .bind(page.id)
        .bind(&page.title)
        .bind(&page.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating informasi page", e))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("InformasiPage", page.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM informasi_pages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting informasi page", e))?;

        Ok(result.rows_affected() > 0)
    }
}
