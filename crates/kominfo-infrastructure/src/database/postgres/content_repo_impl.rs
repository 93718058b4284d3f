// ============================================================================
// Kominfo Infrastructure - PostgreSQL Content Repository
// File: crates/kominfo-infrastructure/src/database/postgres/content_repo_impl.rs
// ============================================================================

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

use kominfo_core::domain::{ContentEntity, Document, Post};
use kominfo_core::error::DomainError;
use kominfo_core::repositories::{ContentRepository, DocumentRepository, PostRepository};
use kominfo_shared::types::Pagination;

use super::db_error;

pub type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Table mapping of a content entity.
///
/// `FIELDS` are the columns written by insert and update, bound in order by
/// `bind_fields`. `id` and `created_at` are written on insert only,
/// `updated_at` is stamped by the database on update, and counters
/// (`views`, `downloads`) are never written from the entity.
pub trait PgRecord: ContentEntity {
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;

    const TABLE: &'static str;
    /// Full select list
    const COLUMNS: &'static str;
    const FIELDS: &'static [&'static str];
    const ORDER_BY: &'static str;
    const SEARCH_COLUMN: &'static str = "title";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self::Row>) -> PgQueryAs<'q, Self::Row>;
}

fn insert_sql<T: PgRecord>() -> String {
    let placeholders: Vec<String> = (1..=T::FIELDS.len() + 2).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} (id, created_at, {}) VALUES ({}) RETURNING {}",
        T::TABLE,
        T::FIELDS.join(", "),
        placeholders.join(", "),
        T::COLUMNS
    )
}

fn update_sql<T: PgRecord>() -> String {
    let sets: Vec<String> = T::FIELDS
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{} = ${}", field, i + 2))
        .collect();
    format!(
        "UPDATE {} SET {}, updated_at = NOW() WHERE id = $1 RETURNING {}",
        T::TABLE,
        sets.join(", "),
        T::COLUMNS
    )
}

fn search_clause<T: PgRecord>() -> String {
    format!(
        "($1::text IS NULL OR {} ILIKE '%' || $1 || '%' ESCAPE '\\')",
        T::SEARCH_COLUMN
    )
}

/// Admin search is a substring match; `%` and `_` typed by the user are literal.
fn escape_like(term: Option<String>) -> Option<String> {
    term.map(|t| {
        let mut escaped = String::with_capacity(t.len());
        for c in t.chars() {
            if matches!(c, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    })
}

pub struct PgContentRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgContentRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, _entity: PhantomData }
    }
}

#[async_trait]
impl<T: PgRecord> ContentRepository<T> for PgContentRepository<T> {
    async fn list_all(&self) -> Result<Vec<T>, DomainError> {
        let sql = format!("SELECT {} FROM {} ORDER BY {}", T::COLUMNS, T::TABLE, T::ORDER_BY);
        let rows: Vec<T::Row> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(&format!("listing {}", T::TABLE), e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_page(&self, search: Option<String>, pagination: Pagination) -> Result<Vec<T>, DomainError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY {} LIMIT $2 OFFSET $3",
            T::COLUMNS,
            T::TABLE,
            search_clause::<T>(),
            T::ORDER_BY
        );
        let rows: Vec<T::Row> = sqlx::query_as(&sql)
            .bind(escape_like(search))
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(&format!("paging {}", T::TABLE), e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, search: Option<String>) -> Result<u64, DomainError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE {}", T::TABLE, search_clause::<T>());
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(escape_like(search))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(&format!("counting {}", T::TABLE), e))?;

        Ok(count.max(0) as u64)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, DomainError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
        let row: Option<T::Row> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(&format!("finding {} by id", T::TABLE), e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, entity: &T) -> Result<T, DomainError> {
        let sql = insert_sql::<T>();
        let query = sqlx::query_as::<_, T::Row>(&sql)
            .bind(entity.id())
            .bind(chrono::Utc::now());
        let row = entity
            .bind_fields(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(&format!("inserting into {}", T::TABLE), e))?;

        Ok(row.into())
    }

    async fn update(&self, entity: &T) -> Result<T, DomainError> {
        let sql = update_sql::<T>();
        let query = sqlx::query_as::<_, T::Row>(&sql).bind(entity.id());
        let row = entity
            .bind_fields(query)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(&format!("updating {}", T::TABLE), e))?
            .ok_or_else(|| DomainError::not_found(T::LABEL, entity.id()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(&format!("deleting from {}", T::TABLE), e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PostRepository for PgContentRepository<Post> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        let sql = format!("SELECT {} FROM posts WHERE slug = $1", <Post as PgRecord>::COLUMNS);
        let row: Option<<Post as PgRecord>::Row> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding post by slug", e))?;

        Ok(row.map(Into::into))
    }

    async fn increment_views(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("incrementing post views", e))?;
        Ok(())
    }
}

#[async_trait]
impl DocumentRepository for PgContentRepository<Document> {
    async fn increment_downloads(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE documents SET downloads = downloads + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("incrementing document downloads", e))?;
        Ok(())
    }
}
