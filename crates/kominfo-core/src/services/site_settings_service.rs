// ============================================================================
// Kominfo Core - Site Settings Service
// File: crates/kominfo-core/src/services/site_settings_service.rs
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::site_setting::{merge_with_defaults, validate_setting};
use crate::domain::{SiteSetting, SiteSettings};
use crate::error::DomainError;
use crate::repositories::SiteSettingRepository;

pub struct SiteSettingsService {
    repo: Arc<dyn SiteSettingRepository>,
}

impl SiteSettingsService {
    pub fn new(repo: Arc<dyn SiteSettingRepository>) -> Self {
        Self { repo }
    }

    /// Every known key, stored values over defaults.
    pub async fn get(&self) -> Result<SiteSettings, DomainError> {
        Ok(merge_with_defaults(self.repo.list_all().await?))
    }

    /// All-or-nothing: one unknown key or invalid value rejects the whole form.
    pub async fn update(&self, changes: HashMap<String, String>) -> Result<SiteSettings, DomainError> {
        let now = Utc::now();
        let rows = changes
            .iter()
            .map(|(key, value)| {
                validate_setting(key, value).map(|value| SiteSetting {
                    key: key.clone(),
                    value,
                    updated_at: Some(now),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!("Rejected settings update: {}", e))?;

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        info!("Updating site settings: {:?}", keys);
        self.repo.upsert_many(rows).await?;
        self.get().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockSiteSettingRepository;

    #[tokio::test]
    async fn test_update_rejects_unknown_key_without_writing() {
        let mut repo = MockSiteSettingRepository::new();
        repo.expect_upsert_many().never();

        let service = SiteSettingsService::new(Arc::new(repo));
        let changes = HashMap::from([
            ("phone".to_string(), "0361-123".to_string()),
            ("theme".to_string(), "dark".to_string()),
        ]);
        assert!(matches!(service.update(changes).await, Err(DomainError::UnknownSettingKey(_))));
    }

    #[tokio::test]
    async fn test_update_writes_trimmed_values() {
        let mut repo = MockSiteSettingRepository::new();
        repo.expect_upsert_many()
            .withf(|rows| rows.len() == 1 && rows[0].key == "email" && rows[0].value == "ppid@kominfo.go.id")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_list_all().returning(|| {
            Ok(vec![SiteSetting { key: "email".into(), value: "ppid@kominfo.go.id".into(), updated_at: None }])
        });

        let service = SiteSettingsService::new(Arc::new(repo));
        let changes = HashMap::from([("email".to_string(), "  ppid@kominfo.go.id ".to_string())]);
        let settings = service.update(changes).await.unwrap();
        assert_eq!(settings["email"], "ppid@kominfo.go.id");
        assert!(settings.contains_key("site_name"));
    }
}
