// ============================================================================
// Kominfo Core - Gallery Entity
// File: crates/kominfo-core/src/domain/gallery.rs
// Description: Photo gallery items
// ============================================================================

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::{check_link, clean_opt, require_text, ContentEntity};
use super::listing::Listable;
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GalleryInput {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[serde(default)]
    pub image_url: String,

    pub category: Option<String>,

    #[serde(default = "default_true")]
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}

impl GalleryInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.image_url = self.image_url.trim().to_string();
        self.description = clean_opt(self.description);
        self.category = clean_opt(self.category);
        self.validate()?;
        require_text("image_url", &self.image_url)?;
        check_link("image_url", Some(&self.image_url))?;
        Ok(self)
    }
}

impl Listable for Gallery {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn year(&self) -> Option<String> {
        Some(self.created_at.year().to_string())
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl ContentEntity for Gallery {
    type Input = GalleryInput;
    const LABEL: &'static str = "Gallery";

    fn from_input(input: GalleryInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            category: input.category,
            is_published: input.is_published,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: GalleryInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.title = input.title;
        self.description = input.description;
        self.image_url = input.image_url;
        self.category = input.category;
        self.is_published = input.is_published;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, _now: DateTime<FixedOffset>) -> bool {
        self.is_published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_is_required() {
        let input = GalleryInput {
            title: "Upacara HUT RI".to_string(),
            description: None,
            image_url: "  ".to_string(),
            category: Some("Kegiatan".to_string()),
            is_published: true,
        };
        assert!(matches!(Gallery::from_input(input), Err(DomainError::ValidationError(_))));
    }
}
