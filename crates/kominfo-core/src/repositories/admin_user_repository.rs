//! Admin user repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::AdminUser;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminUser>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn create(&self, user: &AdminUser) -> Result<AdminUser, DomainError>;
    async fn record_login(&self, id: &Uuid) -> Result<(), DomainError>;
}
