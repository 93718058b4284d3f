//! Site settings repository trait (port)

use async_trait::async_trait;

use crate::domain::SiteSetting;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SiteSettingRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<SiteSetting>, DomainError>;
    /// Insert-or-replace every row in one transaction.
    async fn upsert_many(&self, settings: Vec<SiteSetting>) -> Result<(), DomainError>;
}
