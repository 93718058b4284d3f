//! Contract shared by the flat content tables managed from the admin dashboard.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::listing::Listable;
use crate::error::DomainError;

/// A row of one of the admin CRUD tables (posts, agenda, pegawai, ...).
pub trait ContentEntity: Listable + Clone + Serialize + Send + Sync + 'static {
    /// Form payload the admin screen submits.
    type Input: Send + 'static;

    /// Human label used in logs and not-found messages.
    const LABEL: &'static str;

    fn from_input(input: Self::Input) -> Result<Self, DomainError>;

    fn apply_input(&mut self, input: Self::Input) -> Result<(), DomainError>;

    fn id(&self) -> Uuid;

    /// Whether the public site shows this row at `now` (office local time).
    fn is_public(&self, now: DateTime<FixedOffset>) -> bool;
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::ValidationError(format!("{}: is required", field)))
    } else {
        Ok(())
    }
}

pub(crate) fn require_html(field: &str, value: &str) -> Result<(), DomainError> {
    if super::rich_text::is_blank_html(value) {
        Err(DomainError::ValidationError(format!("{}: is required", field)))
    } else {
        Ok(())
    }
}

/// Four digit year, e.g. "2024".
pub(crate) fn require_year(value: &str) -> Result<(), DomainError> {
    let value = value.trim();
    if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(DomainError::ValidationError("year: must be a four digit year".into()))
    }
}

/// Site path or absolute http(s) URL. Unlike menu hrefs, `#` anchors are not links here.
fn is_content_link(link: &str) -> bool {
    (link.starts_with('/') && !link.starts_with("//"))
        || link.starts_with("http://")
        || link.starts_with("https://")
}

pub(crate) fn check_link(field: &str, value: Option<&str>) -> Result<(), DomainError> {
    match value {
        Some(link) if !is_content_link(link) => Err(DomainError::ValidationError(
            format!("{}: must be a site path or an http(s) URL", field),
        )),
        _ => Ok(()),
    }
}

/// Fixed offset for a whole-hour UTC offset; out-of-range values fall back to UTC.
pub fn local_offset(hours: i32) -> FixedOffset {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Trims and turns empty strings into `None`.
pub(crate) fn clean_opt(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_and_links() {
        assert!(require_year("2024").is_ok());
        assert!(require_year("24").is_err());
        assert!(require_year("20a4").is_err());
        assert!(check_link("link_url", Some("https://zoom.us/j/1")).is_ok());
        assert!(check_link("link_url", Some("zoom.us")).is_err());
        assert!(check_link("link_url", None).is_ok());
        assert!(check_link("link_url", Some("/layanan/izin")).is_ok());
        assert!(check_link("link_url", Some("#daftar")).is_err());
        assert!(check_link("link_url", Some("//evil.example")).is_err());
        assert_eq!(clean_opt(Some("  ".into())), None);
        assert_eq!(local_offset(7).local_minus_utc(), 7 * 3600);
        assert_eq!(local_offset(99).local_minus_utc(), 0);
    }
}
