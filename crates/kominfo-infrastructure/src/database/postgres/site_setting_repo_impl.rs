// ============================================================================
// Kominfo Infrastructure - PostgreSQL Site Settings Repository
// File: crates/kominfo-infrastructure/src/database/postgres/site_setting_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use kominfo_core::domain::SiteSetting;
use kominfo_core::error::DomainError;
use kominfo_core::repositories::SiteSettingRepository;

use super::db_error;

pub struct PgSiteSettingRepository {
    pool: PgPool,
}

impl PgSiteSettingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SiteSettingRow {
    key: String,
    value: String,
    updated_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl SiteSettingRepository for PgSiteSettingRepository {
    async fn list_all(&self) -> Result<Vec<SiteSetting>, DomainError> {
        let rows: Vec<SiteSettingRow> =
            sqlx::query_as("SELECT key, value, updated_at FROM site_settings ORDER BY key ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("listing site settings", e))?;

        Ok(rows
            .into_iter()
            .map(|row| SiteSetting { key: row.key, value: row.value, updated_at: row.updated_at })
            .collect())
    }

    /// All rows are written in one transaction.
    async fn upsert_many(&self, settings: Vec<SiteSetting>) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting settings transaction", e))?;

        for setting in &settings {
            sqlx::query(
                r#"
                INSERT INTO site_settings (key, value, updated_at)
                VALUES ($1, $2, NOW())
                ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
                "#,
            )
            .bind(&setting.key)
            .bind(&setting.value)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("upserting site setting", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("committing settings transaction", e))?;

        info!("Site settings saved: {} keys", settings.len());
        Ok(())
    }
}
