// ============================================================================
// Kominfo Infrastructure - Local Object Storage
// File: crates/kominfo-infrastructure/src/storage/local.rs
// ============================================================================

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};

use kominfo_core::error::DomainError;
use kominfo_core::repositories::ObjectStorage;

/// Stores uploads under `root_dir`; the HTTP layer serves that directory at
/// `public_path`.
pub struct LocalObjectStorage {
    root_dir: PathBuf,
    public_path: String,
}

impl LocalObjectStorage {
    pub fn new(root_dir: impl Into<PathBuf>, public_path: &str) -> Self {
        Self {
            root_dir: root_dir.into(),
            public_path: public_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Keys are relative `a/b/c.ext` paths; anything that could escape
    /// `root_dir` is rejected.
    fn resolve(&self, key: &str) -> Result<PathBuf, DomainError> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(DomainError::StorageError(format!("invalid object key: {}", key)));
        }
        Ok(self.root_dir.join(relative))
    }
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), DomainError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create storage directory {}: {}", parent.display(), e);
                DomainError::StorageError(e.to_string())
            })?;
        }

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        info!("Stored object {} ({} bytes, {})", key, bytes.len(), content_type);
        Ok(())
    }

    /// Missing objects are not an error.
    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted object {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Object already gone: {}", key);
                Ok(())
            }
            Err(e) => Err(DomainError::StorageError(e.to_string())),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_path, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_writes_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), "/storage/");

        storage
            .put("images/2024/06/abc-logo.png", b"png".to_vec(), "image/png")
            .await
            .unwrap();

        let written = std::fs::read(dir.path().join("images/2024/06/abc-logo.png")).unwrap();
        assert_eq!(written, b"png");
        assert_eq!(storage.public_url("images/2024/06/abc-logo.png"), "/storage/images/2024/06/abc-logo.png");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), "/storage");
        storage.put("documents/a.pdf", vec![1, 2, 3], "application/pdf").await.unwrap();

        storage.delete("documents/a.pdf").await.unwrap();
        storage.delete("documents/a.pdf").await.unwrap();
        assert!(!dir.path().join("documents/a.pdf").exists());
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), "/storage");

        for key in ["../etc/passwd", "/abs/path", "images/../../x", ""] {
            let result = storage.put(key, vec![0], "text/plain").await;
            assert!(matches!(result, Err(DomainError::StorageError(_))), "{key}");
        }
    }
}
