// ============================================================================
// Kominfo Infrastructure - YouTube Data API Client
// File: crates/kominfo-infrastructure/src/youtube/client.rs
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use kominfo_core::domain::YoutubeVideo;
use kominfo_core::error::DomainError;
use kominfo_core::repositories::VideoSource;
use kominfo_shared::config::YoutubeSettings;

/// Latest uploads of one channel via `GET {base}/search`.
pub struct YoutubeClient {
    client: Client,
    base_url: String,
    api_key: String,
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    published_at: DateTime<Utc>,
}

impl YoutubeClient {
    /// Returns `Ok(None)` when the API key or channel id is missing.
    pub fn from_settings(settings: &YoutubeSettings) -> Result<Option<Self>, DomainError> {
        let (Some(api_key), Some(channel_id)) = (
            settings.api_key.as_deref().filter(|k| !k.is_empty()),
            settings.channel_id.as_deref().filter(|c| !c.is_empty()),
        ) else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::ExternalServiceError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Some(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            channel_id: channel_id.to_string(),
        }))
    }
}

#[async_trait]
impl VideoSource for YoutubeClient {
    async fn latest(&self, max_results: u32) -> Result<Vec<YoutubeVideo>, DomainError> {
        let url = format!("{}/search", self.base_url);
        debug!("Fetching latest videos for channel {}", self.channel_id);

        let max_results = max_results.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("channelId", self.channel_id.as_str()),
                ("order", "date"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(format!("YouTube request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("YouTube API error: {} - {}", status, body);
            return Err(DomainError::ExternalServiceError(format!("YouTube API returned {}", status)));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalServiceError(format!("invalid YouTube response: {}", e)))?;

        // Channel and playlist hits carry no videoId
        Ok(body
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(YoutubeVideo {
                    id: video_id.clone(),
                    title: item.snippet.title,
                    youtube_id: video_id,
                    published_at: item.snippet.published_at,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base: &str) -> YoutubeSettings {
        YoutubeSettings {
            api_base_url: base.to_string(),
            api_key: Some("test-key".into()),
            channel_id: Some("UC123".into()),
            max_results: 6,
            timeout_seconds: 5,
        }
    }

    #[test]
    fn test_unconfigured_client_is_none() {
        let mut s = settings("http://localhost");
        s.api_key = Some(String::new());
        assert!(YoutubeClient::from_settings(&s).unwrap().is_none());
        s.api_key = Some("k".into());
        s.channel_id = None;
        assert!(YoutubeClient::from_settings(&s).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_latest_maps_search_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("channelId", "UC123"))
            .and(query_param("maxResults", "3"))
            .and(query_param("order", "date"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": { "kind": "youtube#video", "videoId": "vid1" },
                        "snippet": { "title": "Podcast Kominfo", "publishedAt": "2024-06-01T08:00:00Z" }
                    },
                    {
                        "id": { "kind": "youtube#playlist", "playlistId": "pl1" },
                        "snippet": { "title": "Playlist", "publishedAt": "2024-05-01T08:00:00Z" }
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = YoutubeClient::from_settings(&settings(&server.uri())).unwrap().unwrap();
        let videos = client.latest(3).await.unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].youtube_id, "vid1");
        assert_eq!(videos[0].title, "Podcast Kominfo");
    }

    #[tokio::test]
    async fn test_upstream_error_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = YoutubeClient::from_settings(&settings(&server.uri())).unwrap().unwrap();
        let result = client.latest(6).await;
        assert!(matches!(result, Err(DomainError::ExternalServiceError(_))));
    }
}
