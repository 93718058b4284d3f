// ============================================================================
// Kominfo Core - Site Settings
// File: crates/kominfo-core/src/domain/site_setting.rs
// Description: Key/value site settings (contact info, social links, footer)
// ============================================================================

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::navigation_menu::is_valid_href;
use crate::error::DomainError;

/// Stored row (`site_settings`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Text,
    Email,
    Url,
}

#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub kind: SettingKind,
}

const fn def(key: &'static str, default: &'static str, kind: SettingKind) -> SettingDef {
    SettingDef { key, default, kind }
}

/// Every key the admin settings screen may write.
pub const SETTING_DEFS: &[SettingDef] = &[
    def("site_name", "Dinas Komunikasi dan Informatika", SettingKind::Text),
    def("site_tagline", "", SettingKind::Text),
    def("address", "", SettingKind::Text),
    def("phone", "", SettingKind::Text),
    def("whatsapp", "", SettingKind::Text),
    def("email", "", SettingKind::Email),
    def("office_hours", "Senin - Jumat, 08.00 - 16.00", SettingKind::Text),
    def("logo_url", "", SettingKind::Url),
    def("maps_embed_url", "", SettingKind::Url),
    def("facebook_url", "", SettingKind::Url),
    def("instagram_url", "", SettingKind::Url),
    def("twitter_url", "", SettingKind::Url),
    def("youtube_url", "", SettingKind::Url),
    def("footer_text", "", SettingKind::Text),
];

pub type SiteSettings = BTreeMap<String, String>;

pub fn setting_def(key: &str) -> Option<&'static SettingDef> {
    SETTING_DEFS.iter().find(|d| d.key == key)
}

pub fn default_settings() -> SiteSettings {
    SETTING_DEFS
        .iter()
        .map(|d| (d.key.to_string(), d.default.to_string()))
        .collect()
}

/// Stored rows override defaults; rows with unknown keys are ignored.
pub fn merge_with_defaults(rows: Vec<SiteSetting>) -> SiteSettings {
    let mut settings = default_settings();
    for row in rows {
        if let Some(slot) = settings.get_mut(&row.key) {
            *slot = row.value;
        }
    }
    settings
}

/// Returns the trimmed value to store. Empty values are always allowed (clears the field).
pub fn validate_setting(key: &str, value: &str) -> Result<String, DomainError> {
    let def = setting_def(key).ok_or_else(|| DomainError::UnknownSettingKey(key.to_string()))?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    match def.kind {
        SettingKind::Email if !value.validate_email() => Err(DomainError::ValidationError(format!(
            "{}: invalid email address",
            key
        ))),
        SettingKind::Url if !is_valid_href(value) => Err(DomainError::ValidationError(format!(
            "{}: must be a site path or an http(s) URL",
            key
        ))),
        _ => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_known_keys_only() {
        let rows = vec![
            SiteSetting { key: "phone".into(), value: "(0361) 123".into(), updated_at: None },
            SiteSetting { key: "legacy_key".into(), value: "x".into(), updated_at: None },
        ];
        let settings = merge_with_defaults(rows);
        assert_eq!(settings["phone"], "(0361) 123");
        assert_eq!(settings["site_name"], "Dinas Komunikasi dan Informatika");
        assert!(!settings.contains_key("legacy_key"));
        assert_eq!(settings.len(), SETTING_DEFS.len());
    }

    #[test]
    fn test_validate_setting() {
        assert_eq!(validate_setting("email", " info@kominfo.go.id ").unwrap(), "info@kominfo.go.id");
        assert!(validate_setting("email", "bukan-email").is_err());
        assert!(validate_setting("facebook_url", "facebook.com/x").is_err());
        assert_eq!(validate_setting("facebook_url", "").unwrap(), "");
        assert!(matches!(
            validate_setting("theme", "dark"),
            Err(DomainError::UnknownSettingKey(_))
        ));
    }
}
