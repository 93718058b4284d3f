// ============================================================================
// Kominfo Core - Public Service Entity
// File: crates/kominfo-core/src/domain/service_item.rs
// Description: Public service tiles (layanan) shown on the home page
// ============================================================================

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::{check_link, clean_opt, ContentEntity};
use super::listing::Listable;
use crate::error::DomainError;

/// Public service (`services`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub link_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceItemInput {
    #[validate(length(min = 2, max = 150, message = "Title must be between 2 and 150 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(max = 100, message = "Icon name too long"))]
    pub icon: Option<String>,

    pub link_url: Option<String>,

    pub category: Option<String>,

    #[serde(default)]
    pub display_order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl ServiceItemInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.description = clean_opt(self.description);
        self.icon = clean_opt(self.icon);
        self.link_url = clean_opt(self.link_url);
        self.category = clean_opt(self.category);
        self.validate()?;
        check_link("link_url", self.link_url.as_deref())?;
        Ok(self)
    }
}

impl Listable for ServiceItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn display_order(&self) -> i32 {
        self.display_order
    }
}

impl ContentEntity for ServiceItem {
    type Input = ServiceItemInput;
    const LABEL: &'static str = "Service";

    fn from_input(input: ServiceItemInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            icon: input.icon,
            link_url: input.link_url,
            category: input.category,
            display_order: input.display_order,
            is_active: input.is_active,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: ServiceItemInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.title = input.title;
        self.description = input.description;
        self.icon = input.icon;
        self.link_url = input.link_url;
        self.category = input.category;
        self.display_order = input.display_order;
        self.is_active = input.is_active;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, _now: DateTime<FixedOffset>) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_must_be_path_or_http() {
        let mut input = ServiceItemInput {
            title: "Pengaduan".to_string(),
            description: None,
            icon: Some("message-square".to_string()),
            link_url: Some("lapor.go.id".to_string()),
            category: None,
            display_order: 1,
            is_active: true,
        };
        assert!(ServiceItem::from_input(input.clone()).is_err());

        input.link_url = Some("https://www.lapor.go.id".to_string());
        let item = ServiceItem::from_input(input).unwrap();
        assert_eq!(item.display_order, 1);
    }
}
