// ============================================================================
// Kominfo Core - Media Service
// File: crates/kominfo-core/src/services/media_service.rs
// ============================================================================
//! Admin uploads (images, documents) into object storage

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::media::{object_key, resolve_content_type};
use crate::domain::{MediaBucket, UploadedFile};
use crate::error::DomainError;
use crate::repositories::ObjectStorage;

pub struct MediaService {
    storage: Arc<dyn ObjectStorage>,
    max_upload_bytes: usize,
}

impl MediaService {
    pub fn new(storage: Arc<dyn ObjectStorage>, max_upload_bytes: usize) -> Self {
        Self { storage, max_upload_bytes }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, DomainError> {
        let bucket: MediaBucket = bucket.parse()?;
        if bytes.is_empty() {
            return Err(DomainError::ValidationError("file: is empty".into()));
        }
        if bytes.len() > self.max_upload_bytes {
            warn!("Upload rejected, {} bytes exceeds limit", bytes.len());
            return Err(DomainError::FileTooLarge { size: bytes.len(), max: self.max_upload_bytes });
        }

        let content_type = resolve_content_type(file_name, content_type);
        if !bucket.accepts(&content_type) {
            warn!("Upload rejected, {} not allowed in {}", content_type, bucket);
            return Err(DomainError::UnsupportedMediaType(content_type));
        }

        let key = object_key(bucket, file_name, Utc::now());
        let size = bytes.len();
        self.storage.put(&key, bytes, &content_type).await?;
        info!("Uploaded {} ({} bytes)", key, size);

        Ok(UploadedFile {
            bucket,
            url: self.storage.public_url(&key),
            key,
            file_name: file_name.to_string(),
            content_type,
            size,
        })
    }
}
