//! Channel videos listed on the home page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /api/youtube` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub id: String,
    pub title: String,
    pub youtube_id: String,
    pub published_at: DateTime<Utc>,
}

impl YoutubeVideo {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.youtube_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_names_are_camel_case() {
        let video = YoutubeVideo {
            id: "abc123".into(),
            title: "Podcast Kominfo".into(),
            youtube_id: "abc123".into(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["youtubeId"], "abc123");
        assert_eq!(json["publishedAt"], "2024-01-02T03:04:05Z");
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
    }
}
