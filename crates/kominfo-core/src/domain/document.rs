// ============================================================================
// Kominfo Core - Document Entities
// File: crates/kominfo-core/src/domain/document.rs
// Description: Public documents (dokumen publik) and program documents
// ============================================================================

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::{check_link, clean_opt, require_text, require_year, ContentEntity};
use super::listing::Listable;
use crate::error::DomainError;

/// Downloadable document (`documents`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub year: String,
    pub file_url: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub downloads: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DocumentInput {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub file_url: String,

    pub file_name: Option<String>,

    #[validate(range(min = 0, message = "File size cannot be negative"))]
    pub file_size: Option<i64>,

    #[serde(default = "default_true")]
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}

fn check_file_url(value: &str) -> Result<(), DomainError> {
    require_text("file_url", value)?;
    check_link("file_url", Some(value))
}

impl DocumentInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.category = self.category.trim().to_string();
        self.year = self.year.trim().to_string();
        self.file_url = self.file_url.trim().to_string();
        self.description = clean_opt(self.description);
        self.file_name = clean_opt(self.file_name);
        self.validate()?;
        require_year(&self.year)?;
        check_file_url(&self.file_url)?;
        Ok(self)
    }
}

impl Listable for Document {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn year(&self) -> Option<String> {
        Some(self.year.clone())
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl ContentEntity for Document {
    type Input = DocumentInput;
    const LABEL: &'static str = "Document";

    fn from_input(input: DocumentInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            category: input.category,
            year: input.year,
            file_url: input.file_url,
            file_name: input.file_name,
            file_size: input.file_size,
            downloads: 0,
            is_published: input.is_published,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: DocumentInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.title = input.title;
        self.description = input.description;
        self.category = input.category;
        self.year = input.year;
        self.file_url = input.file_url;
        self.file_name = input.file_name;
        self.file_size = input.file_size;
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

/// Document attached to a program page (`/program/{program}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDocument {
    pub id: Uuid,
    pub program: String,
    pub title: String,
    pub description: Option<String>,
    pub year: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProgramDocumentInput {
    /// Program key, e.g. "spbe" or "smart-city"
    #[validate(length(min = 1, max = 100, message = "Program is required"))]
    pub program: String,

    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub file_url: String,
}

impl ProgramDocumentInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.program = kominfo_shared::utils::slugify(&self.program);
        self.title = self.title.trim().to_string();
        self.year = self.year.trim().to_string();
        self.file_url = self.file_url.trim().to_string();
        self.description = clean_opt(self.description);
        self.validate()?;
        require_year(&self.year)?;
        check_file_url(&self.file_url)?;
        Ok(self)
    }
}

impl Listable for ProgramDocument {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.program)
    }

    fn year(&self) -> Option<String> {
        Some(self.year.clone())
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl ContentEntity for ProgramDocument {
    type Input = ProgramDocumentInput;
    const LABEL: &'static str = "ProgramDocument";

    fn from_input(input: ProgramDocumentInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            program: input.program,
            title: input.title,
            description: input.description,
            year: input.year,
            file_url: input.file_url,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: ProgramDocumentInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.program = input.program;
        self.title = input.title;
        self.description = input.description;
        self.year = input.year;
        self.file_url = input.file_url;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, _now: DateTime<FixedOffset>) -> bool {
        true
    }
}
