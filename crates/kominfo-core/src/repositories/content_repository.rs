//! Content repository traits (port)

use async_trait::async_trait;
use uuid::Uuid;

use kominfo_shared::types::Pagination;

use crate::domain::{ContentEntity, Post};
use crate::error::DomainError;

/// CRUD over one flat content table.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ContentRepository<T: ContentEntity>: Send + Sync {
    /// Full table in the table's natural order; public pages narrow it in memory.
    async fn list_all(&self) -> Result<Vec<T>, DomainError>;

    /// One admin page, optionally filtered by a case-insensitive title search.
    async fn list_page(&self, search: Option<String>, pagination: Pagination) -> Result<Vec<T>, DomainError>;

    async fn count(&self, search: Option<String>) -> Result<u64, DomainError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, DomainError>;

    async fn create(&self, entity: &T) -> Result<T, DomainError>;

    async fn update(&self, entity: &T) -> Result<T, DomainError>;

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}

/// Post-only lookups.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError>;
    async fn increment_views(&self, id: &Uuid) -> Result<(), DomainError>;
}

/// Document-only counters.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn increment_downloads(&self, id: &Uuid) -> Result<(), DomainError>;
}
