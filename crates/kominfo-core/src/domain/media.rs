//! Upload buckets and the rules applied before a file reaches object storage.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kominfo_shared::utils::sanitize_file_name;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaBucket {
    Images,
    Documents,
}

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp", "image/svg+xml"];

const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/zip",
];

impl MediaBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaBucket::Images => "images",
            MediaBucket::Documents => "documents",
        }
    }

    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            MediaBucket::Images => IMAGE_TYPES,
            MediaBucket::Documents => DOCUMENT_TYPES,
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        let essence = content_type.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        self.allowed_types().contains(&essence.as_str())
    }
}

impl fmt::Display for MediaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "images" => Ok(MediaBucket::Images),
            "documents" => Ok(MediaBucket::Documents),
            other => Err(DomainError::ValidationError(format!("bucket: unknown bucket '{}'", other))),
        }
    }
}

/// Content type from the multipart header, or guessed from the extension when
/// the header is missing or generic.
pub fn resolve_content_type(file_name: &str, declared: Option<&str>) -> String {
    match declared.map(str::trim) {
        Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => ct.to_string(),
        _ => mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

/// `{bucket}/{yyyy}/{mm}/{uuid}-{sanitized name}`
pub fn object_key(bucket: MediaBucket, file_name: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}/{:04}/{:02}/{}-{}",
        bucket,
        at.year(),
        at.month(),
        Uuid::new_v4(),
        sanitize_file_name(file_name)
    )
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    pub bucket: MediaBucket,
    pub key: String,
    pub url: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bucket_accepts_by_essence() {
        assert!(MediaBucket::Images.accepts("image/png"));
        assert!(MediaBucket::Documents.accepts("application/pdf; charset=binary"));
        assert!(!MediaBucket::Images.accepts("application/pdf"));
        assert!("videos".parse::<MediaBucket>().is_err());
    }

    #[test]
    fn test_content_type_falls_back_to_extension() {
        assert_eq!(resolve_content_type("foto.JPG", None), "image/jpeg");
        assert_eq!(resolve_content_type("laporan.pdf", Some("application/octet-stream")), "application/pdf");
        assert_eq!(resolve_content_type("x.bin", Some("image/png")), "image/png");
    }

    #[test]
    fn test_object_key_layout() {
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let key = object_key(MediaBucket::Documents, "Laporan Kinerja.pdf", at);
        assert!(key.starts_with("documents/2024/07/"));
        assert!(key.ends_with("-laporan-kinerja.pdf"));
    }
}
