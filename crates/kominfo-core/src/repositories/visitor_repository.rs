//! Visitor counter repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::DailyCount;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Adds one visit to `date` and returns that day's new count.
    async fn record_visit(&self, date: NaiveDate) -> Result<i64, DomainError>;
    async fn counts_since(&self, from: NaiveDate) -> Result<Vec<DailyCount>, DomainError>;
    async fn total(&self) -> Result<i64, DomainError>;
}
