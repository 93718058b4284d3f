// ============================================================================
// Kominfo Core - Visitor Statistics Service
// File: crates/kominfo-core/src/services/visitor_service.rs
// ============================================================================

use std::sync::Arc;

use chrono::{Days, FixedOffset, NaiveDate, Utc};
use tracing::debug;

use kominfo_shared::constants::VISITOR_STATS_DAYS;

use crate::domain::VisitorStats;
use crate::error::DomainError;
use crate::repositories::VisitorRepository;

pub struct VisitorService {
    repo: Arc<dyn VisitorRepository>,
    offset: FixedOffset,
}

impl VisitorService {
    pub fn new(repo: Arc<dyn VisitorRepository>, offset: FixedOffset) -> Self {
        Self { repo, offset }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Counts one visit on today's local date; returns today's count.
    pub async fn record_visit(&self) -> Result<i64, DomainError> {
        let count = self.repo.record_visit(self.today()).await?;
        debug!("Visit recorded, today = {}", count);
        Ok(count)
    }

    pub async fn stats(&self) -> Result<VisitorStats, DomainError> {
        self.stats_for(self.today()).await
    }

    async fn stats_for(&self, today: NaiveDate) -> Result<VisitorStats, DomainError> {
        let from = today
            .checked_sub_days(Days::new(u64::from(VISITOR_STATS_DAYS.saturating_sub(1))))
            .unwrap_or(today);
        let (recent, total) = tokio::try_join!(self.repo.counts_since(from), self.repo.total())?;
        Ok(VisitorStats::from_counts(today, VISITOR_STATS_DAYS, &recent, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyCount;
    use crate::repositories::MockVisitorRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_stats_window_is_seven_days() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        let from = NaiveDate::from_ymd_opt(2024, 8, 11).unwrap();

        let mut repo = MockVisitorRepository::new();
        repo.expect_counts_since()
            .with(eq(from))
            .returning(move |_| Ok(vec![DailyCount { date: today, count: 42 }]));
        repo.expect_total().returning(|| Ok(1000));

        let service = VisitorService::new(Arc::new(repo), FixedOffset::east_opt(7 * 3600).unwrap());
        let stats = service.stats_for(today).await.unwrap();
        assert_eq!(stats.today, 42);
        assert_eq!(stats.total, 1000);
        assert_eq!(stats.daily.first().map(|d| d.date), Some(from));
    }

    #[tokio::test]
    async fn test_record_visit_returns_todays_count() {
        let mut repo = MockVisitorRepository::new();
        repo.expect_record_visit().times(1).returning(|_| Ok(7));

        let service = VisitorService::new(Arc::new(repo), FixedOffset::east_opt(7 * 3600).unwrap());
        assert_eq!(service.record_visit().await.unwrap(), 7);
    }
}
