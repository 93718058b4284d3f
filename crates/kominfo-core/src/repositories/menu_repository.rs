//! Navigation menu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::NavigationMenu;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every row, ordered by `order`.
    async fn list_all(&self) -> Result<Vec<NavigationMenu>, DomainError>;
    async fn list_active(&self) -> Result<Vec<NavigationMenu>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationMenu>, DomainError>;
    async fn create(&self, menu: &NavigationMenu) -> Result<NavigationMenu, DomainError>;
    async fn update(&self, menu: &NavigationMenu) -> Result<NavigationMenu, DomainError>;
    /// Children go with their parent (`ON DELETE CASCADE`). Returns false when nothing was deleted.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
