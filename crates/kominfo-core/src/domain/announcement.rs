// ============================================================================
// Kominfo Core - Announcement Entity
// File: crates/kominfo-core/src/domain/announcement.rs
// Description: Announcements (pengumuman) with an optional display window
// ============================================================================

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::{clean_opt, require_html, ContentEntity};
use super::listing::Listable;
use crate::error::DomainError;

/// Announcement (`announcements`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub attachment_url: Option<String>,
    pub is_active: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnnouncementInput {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,

    #[serde(default)]
    pub content: String,

    pub attachment_url: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

impl AnnouncementInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.attachment_url = clean_opt(self.attachment_url);
        self.validate()?;
        require_html("content", &self.content)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(DomainError::ValidationError(
                    "end_date: must not be before start_date".into(),
                ));
            }
        }
        Ok(self)
    }
}

impl Announcement {
    /// Active and `date` falls inside the (open-ended) window.
    pub fn is_visible_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.start_date.is_none_or(|start| start <= date)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

impl Listable for Announcement {
    fn title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<String> {
        Some(self.created_at.year().to_string())
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl ContentEntity for Announcement {
    type Input = AnnouncementInput;
    const LABEL: &'static str = "Announcement";

    fn from_input(input: AnnouncementInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            attachment_url: input.attachment_url,
            is_active: input.is_active,
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: AnnouncementInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.title = input.title;
        self.content = input.content;
        self.attachment_url = input.attachment_url;
        self.is_active = input.is_active;
        self.start_date = input.start_date;
        self.end_date = input.end_date;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, now: DateTime<FixedOffset>) -> bool {
        self.is_visible_on(now.date_naive())
    }
}
