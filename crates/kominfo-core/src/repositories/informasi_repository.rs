//! Informasi page repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::InformasiPage;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait InformasiPageRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<InformasiPage>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<InformasiPage>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<InformasiPage>, DomainError>;
    async fn create(&self, page: &InformasiPage) -> Result<InformasiPage, DomainError>;
    async fn update(&self, page: &InformasiPage) -> Result<InformasiPage, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
