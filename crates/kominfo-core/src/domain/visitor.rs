// ============================================================================
// Kominfo Core - Visitor Statistics
// File: crates/kominfo-core/src/domain/visitor.rs
// Description: Daily visit counters and the stats payload shown in the footer
// ============================================================================

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One `visitor_daily` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// `GET /api/visitor-stats` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorStats {
    pub today: i64,
    pub total: i64,
    pub daily: Vec<DailyCount>,
}

impl VisitorStats {
    /// Builds the last `days` days ending at `today`, oldest first, with missing
    /// days filled with zero.
    pub fn from_counts(today: NaiveDate, days: u32, recent: &[DailyCount], total: i64) -> Self {
        let by_date: HashMap<NaiveDate, i64> = recent.iter().map(|d| (d.date, d.count)).collect();
        let daily: Vec<DailyCount> = (0..days)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
            .map(|date| DailyCount { date, count: by_date.get(&date).copied().unwrap_or(0) })
            .collect();

        Self {
            today: by_date.get(&today).copied().unwrap_or(0),
            total,
            daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_zero_fill_oldest_first() {
        let recent = vec![
            DailyCount { date: d(10), count: 5 },
            DailyCount { date: d(7), count: 2 },
        ];
        let stats = VisitorStats::from_counts(d(10), 7, &recent, 120);

        assert_eq!(stats.today, 5);
        assert_eq!(stats.total, 120);
        assert_eq!(stats.daily.len(), 7);
        assert_eq!(stats.daily[0], DailyCount { date: d(4), count: 0 });
        assert_eq!(stats.daily[3], DailyCount { date: d(7), count: 2 });
        assert_eq!(stats.daily[6], DailyCount { date: d(10), count: 5 });
    }

    #[test]
    fn test_no_visit_today() {
        let stats = VisitorStats::from_counts(d(10), 7, &[], 0);
        assert_eq!(stats.today, 0);
        assert!(stats.daily.iter().all(|c| c.count == 0));
    }
}
