//! Channel video feed trait (port)

use async_trait::async_trait;

use crate::domain::YoutubeVideo;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Newest uploads first, at most `max_results`.
    async fn latest(&self, max_results: u32) -> Result<Vec<YoutubeVideo>, DomainError>;
}
