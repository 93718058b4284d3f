// ============================================================================
// Kominfo Infrastructure - PostgreSQL Navigation Menu Repository
// File: crates/kominfo-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use kominfo_core::domain::NavigationMenu;
use kominfo_core::error::DomainError;
use kominfo_core::repositories::MenuRepository;

use super::db_error;

// "order" is a reserved word and stays quoted
const MENU_COLUMNS: &str = r#"id, title, href, parent_id, "order", is_active, created_at, updated_at"#;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NavigationMenuRow {
    id: Uuid,
    title: String,
    href: String,
    parent_id: Option<Uuid>,
    order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<NavigationMenuRow> for NavigationMenu {
    fn from(row: NavigationMenuRow) -> Self {
        NavigationMenu {
            id: row.id,
            title: row.title,
            href: row.href,
            parent_id: row.parent_id,
            order: row.order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_all(&self) -> Result<Vec<NavigationMenu>, DomainError> {
        let rows: Vec<NavigationMenuRow> = sqlx::query_as(&format!(
            r#"SELECT {} FROM navigation_menus ORDER BY "order" ASC, title ASC"#,
            MENU_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing menus", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active(&self) -> Result<Vec<NavigationMenu>, DomainError> {
        let rows: Vec<NavigationMenuRow> = sqlx::query_as(&format!(
            r#"SELECT {} FROM navigation_menus WHERE is_active = TRUE ORDER BY "order" ASC, title ASC"#,
            MENU_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing active menus", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationMenu>, DomainError> {
        let row: Option<NavigationMenuRow> =
            sqlx::query_as(&format!("SELECT {} FROM navigation_menus WHERE id = $1", MENU_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding menu by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, menu: &NavigationMenu) -> Result<NavigationMenu, DomainError> {
        let row: NavigationMenuRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO navigation_menus (id, title, href, parent_id, "order", is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            MENU_COLUMNS
        ))
        .bind(menu.id)
        .bind(&menu.title)
        .bind(&menu.href)
        .bind(menu.parent_id)
        .bind(menu.order)
        .bind(menu.is_active)
        .bind(menu.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating menu", e))?;

        info!("Menu inserted: {} ({})", row.title, row.id);
        Ok(row.into())
    }

    async fn update(&self, menu: &NavigationMenu) -> Result<NavigationMenu, DomainError> {
        let row: Option<NavigationMenuRow> = sqlx::query_as(&format!(
            r#"
            UPDATE navigation_menus
            SET title = $2, href = $3, parent_id = $4, "order" = $5, is_active = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            MENU_COLUMNS
        ))
        .bind(menu.id)
        .bind(&menu.title)
        .bind(&menu.href)
        .bind(menu.parent_id)
        .bind(menu.order)
        .bind(menu.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating menu", e))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("Menu", menu.id))
    }

    /// Sub-menus go with their parent (`ON DELETE CASCADE`).
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM navigation_menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting menu", e))?;

        Ok(result.rows_affected() > 0)
    }
}
