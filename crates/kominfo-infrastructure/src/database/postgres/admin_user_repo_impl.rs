// ============================================================================
// Kominfo Infrastructure - PostgreSQL Admin User Repository
// File: crates/kominfo-infrastructure/src/database/postgres/admin_user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use kominfo_core::domain::AdminUser;
use kominfo_core::error::DomainError;
use kominfo_core::repositories::AdminUserRepository;

use super::db_error;

pub struct PgAdminUserRepository {
    pool: PgPool,
}

impl PgAdminUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct AdminUserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    display_name: Option<String>,
    is_active: bool,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(row: AdminUserRow) -> Self {
        AdminUser {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            display_name: row.display_name,
            is_active: row.is_active,
            last_login: row.last_login,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl AdminUserRepository for PgAdminUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminUser>, DomainError> {
        let row: Option<AdminUserRow> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, display_name, is_active, last_login, created_at, updated_at
            FROM admin_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding admin by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError> {
        let row: Option<AdminUserRow> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, display_name, is_active, last_login, created_at, updated_at
            FROM admin_users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding admin by email", e))?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting admins", e))?;

        Ok(count.max(0) as u64)
    }

    async fn create(&self, user: &AdminUser) -> Result<AdminUser, DomainError> {
        let row: AdminUserRow = sqlx::query_as(
            r#"
            INSERT INTO admin_users (id, email, password_hash, display_name, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, password_hash, display_name, is_active, last_login, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(user.is_active)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => DomainError::EmailAlreadyExists(user.email.clone()),
            _ => {
                error!("Failed to create admin: {}", e);
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        info!("Admin user inserted: {}", row.id);
        Ok(row.into())
    }

    async fn record_login(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE admin_users SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("recording admin login", e))?;
        Ok(())
    }
}
