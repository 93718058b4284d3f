// ============================================================================
// Kominfo Core - Post Entity
// File: crates/kominfo-core/src/domain/post.rs
// Description: News posts (berita)
// ============================================================================

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kominfo_shared::utils::slugify;

use super::content::{clean_opt, require_html, ContentEntity};
use super::listing::Listable;
use super::rich_text;
use crate::error::DomainError;

const EXCERPT_CHARS: usize = 200;

/// News post (`posts`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub author: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostInput {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,

    /// Derived from the title when empty
    #[serde(default)]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Excerpt too long"))]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub content: String,

    pub image_url: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,

    pub author: Option<String>,

    #[serde(default)]
    pub is_published: bool,
}

impl PostInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.category = self.category.trim().to_string();
        self.excerpt = clean_opt(self.excerpt);
        self.image_url = clean_opt(self.image_url);
        self.author = clean_opt(self.author);
        self.slug = clean_opt(self.slug).map(|s| slugify(&s));
        self.validate()?;
        require_html("content", &self.content)?;
        if self.excerpt.is_none() {
            self.excerpt = Some(rich_text::excerpt(&self.content, EXCERPT_CHARS));
        }
        Ok(self)
    }

    fn slug_or_title(&self) -> Result<String, DomainError> {
        let slug = self.slug.clone().unwrap_or_else(|| slugify(&self.title));
        if slug.is_empty() {
            return Err(DomainError::ValidationError("slug: cannot be derived from the title".into()));
        }
        Ok(slug)
    }
}

impl Post {
    /// Publishing stamps `published_at` once; unpublishing keeps the stamp.
    fn set_published(&mut self, published: bool) {
        self.is_published = published;
        if published && self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
    }

    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

impl Listable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn year(&self) -> Option<String> {
        Some(self.display_date().year().to_string())
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.display_date()
    }
}

impl ContentEntity for Post {
    type Input = PostInput;
    const LABEL: &'static str = "Post";

    fn from_input(input: PostInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        let slug = input.slug_or_title()?;
        let mut post = Self {
            id: Uuid::new_v4(),
            title: input.title,
            slug,
            excerpt: input.excerpt,
            content: input.content,
            image_url: input.image_url,
            category: input.category,
            author: input.author,
            is_published: false,
            published_at: None,
            views: 0,
            created_at: Utc::now(),
            updated_at: None,
        };
        post.set_published(input.is_published);
        Ok(post)
    }

    fn apply_input(&mut self, input: PostInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.slug = input.slug_or_title()?;
        self.title = input.title;
        self.excerpt = input.excerpt;
        self.content = input.content;
        self.image_url = input.image_url;
        self.category = input.category;
        self.author = input.author;
        self.set_published(input.is_published);
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, now: DateTime<FixedOffset>) -> bool {
        self.is_published && self.published_at.is_none_or(|at| at <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str, published: bool) -> PostInput {
        PostInput {
            title: title.to_string(),
            slug: None,
            excerpt: None,
            content: content.to_string(),
            image_url: Some("  ".to_string()),
            category: "Berita".to_string(),
            author: None,
            is_published: published,
        }
    }

    #[test]
    fn test_slug_is_derived_from_title() {
        let post = Post::from_input(input("Rapat Koordinasi SPBE 2024", "<p>isi</p>", false)).unwrap();
        assert_eq!(post.slug, "rapat-koordinasi-spbe-2024");
        assert_eq!(post.image_url, None);
        assert!(post.published_at.is_none());
    }

    #[test]
    fn test_blank_editor_content_is_rejected() {
        let result = Post::from_input(input("Judul Berita", "<p><br></p>", true));
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_publish_stamps_once() {
        let mut post = Post::from_input(input("Judul Berita", "<p>isi</p>", true)).unwrap();
        let first = post.published_at.unwrap();
        assert!(post.is_public(Utc::now().fixed_offset()));

        post.apply_input(input("Judul Berita", "<p>isi baru</p>", false)).unwrap();
        assert!(!post.is_public(Utc::now().fixed_offset()));
        post.apply_input(input("Judul Berita", "<p>isi baru</p>", true)).unwrap();
        assert_eq!(post.published_at, Some(first));
    }

    #[test]
    fn test_missing_excerpt_is_derived_from_content() {
        let mut post =
            Post::from_input(input("Judul Berita", "<p>Ringkasan <b>berita</b> hari ini</p>", true)).unwrap();
        assert_eq!(post.excerpt.as_deref(), Some("Ringkasan berita hari ini"));

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["excerpt"], "Ringkasan berita hari ini");

        post.apply_input(input("Judul Berita", "<p>Isi <i>terbaru</i></p>", true)).unwrap();
        assert_eq!(post.excerpt.as_deref(), Some("Isi terbaru"));
    }

    #[test]
    fn test_explicit_excerpt_is_kept() {
        let mut form = input("Judul Berita", "<p>Isi panjang</p>", true);
        form.excerpt = Some("  Ringkas  ".to_string());
        let post = Post::from_input(form).unwrap();
        assert_eq!(post.excerpt.as_deref(), Some("Ringkas"));
    }
}
