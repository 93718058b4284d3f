// ============================================================================
// Kominfo Core - Video Service
// File: crates/kominfo-core/src/services/video_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::YoutubeVideo;
use crate::error::DomainError;
use crate::repositories::VideoSource;

pub struct VideoService {
    source: Option<Arc<dyn VideoSource>>,
    max_results: u32,
}

impl VideoService {
    /// `source` is `None` when no API key/channel is configured; the list is then empty.
    pub fn new(source: Option<Arc<dyn VideoSource>>, max_results: u32) -> Self {
        if source.is_none() {
            info!("YouTube feed not configured, /api/youtube returns an empty list");
        }
        Self { source, max_results }
    }

    pub async fn latest(&self) -> Result<Vec<YoutubeVideo>, DomainError> {
        let Some(source) = &self.source else {
            return Ok(Vec::new());
        };
        source.latest(self.max_results).await.inspect_err(|e| {
            error!("YouTube feed failed: {}", e);
        })
    }
}
