// ============================================================================
// Kominfo Infrastructure - PostgreSQL Visitor Counter
// File: crates/kominfo-infrastructure/src/database/postgres/visitor_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use kominfo_core::domain::DailyCount;
use kominfo_core::error::DomainError;
use kominfo_core::repositories::VisitorRepository;

use super::db_error;

pub struct PgVisitorRepository {
    pool: PgPool,
}

impl PgVisitorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DailyCountRow {
    visit_date: NaiveDate,
    count: i64,
}

#[async_trait]
impl VisitorRepository for PgVisitorRepository {
    /// Atomic per-day increment; returns the new count for `date`.
    async fn record_visit(&self, date: NaiveDate) -> Result<i64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO visitor_daily (visit_date, count)
            VALUES ($1, 1)
            ON CONFLICT (visit_date) DO UPDATE SET count = visitor_daily.count + 1
            RETURNING count
            "#,
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("recording visit", e))?;

        Ok(count)
    }

    async fn counts_since(&self, from: NaiveDate) -> Result<Vec<DailyCount>, DomainError> {
        let rows: Vec<DailyCountRow> = sqlx::query_as(
            "SELECT visit_date, count FROM visitor_daily WHERE visit_date >= $1 ORDER BY visit_date ASC",
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading visitor counts", e))?;

        Ok(rows
            .into_iter()
            .map(|row| DailyCount { date: row.visit_date, count: row.count })
            .collect())
    }

    async fn total(&self) -> Result<i64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(count), 0)::BIGINT FROM visitor_daily")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("summing visitor counts", e))?;

        Ok(total)
    }
}
