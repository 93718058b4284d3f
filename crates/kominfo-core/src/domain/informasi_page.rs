// ============================================================================
// Kominfo Core - Informasi Page Entity
// File: crates/kominfo-core/src/domain/informasi_page.rs
// Description: Free-form pages reachable from the "Informasi" sub-menu
// ============================================================================

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kominfo_shared::constants::INFORMASI_PREFIX;

use super::navigation_menu::NavigationMenu;
use super::rich_text;
use crate::error::DomainError;

/// Informasi page row (`informasi_pages`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InformasiPage {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    /// HTML produced by the rich text editor
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editor payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InformasiPageInput {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

impl InformasiPage {
    pub fn new(slug: &str, input: InformasiPageInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: input.title,
            content: input.content,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn apply(&mut self, input: InformasiPageInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.title = input.title;
        self.content = input.content;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        rich_text::is_blank_html(&self.content)
    }
}

impl InformasiPageInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.validate()?;
        Ok(self)
    }
}

/// Derives the page slug from a sub-menu href: `/informasi/{slug}`.
///
/// Query string, fragment and trailing slashes are ignored. Anything outside
/// the prefix, or an empty remainder, has no slug.
pub fn slug_from_href(href: &str) -> Option<&str> {
    let path = href.trim();
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let slug = path.strip_prefix(INFORMASI_PREFIX)?.trim_end_matches('/');
    if slug.is_empty() || slug.contains('/') {
        None
    } else {
        Some(slug)
    }
}

/// One sub-menu entry of "Informasi" and the page it points at, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuPageLink {
    pub menu_id: Uuid,
    pub menu_title: String,
    pub href: String,
    pub slug: Option<String>,
    pub page_id: Option<Uuid>,
}

impl MenuPageLink {
    pub fn has_page(&self) -> bool {
        self.page_id.is_some()
    }
}

/// A stored page and whether the navigation still reaches it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageStatus {
    pub page: InformasiPage,
    pub menu_title: Option<String>,
    #[serde(rename = "notInMenu")]
    pub not_in_menu: bool,
}

/// Result of cross-referencing the Informasi sub-menu against `informasi_pages`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InformasiSync {
    pub menu_links: Vec<MenuPageLink>,
    pub pages: Vec<PageStatus>,
}

impl InformasiSync {
    /// Pages are only editable while a sub-menu links to them.
    pub fn is_editable(&self, slug: &str) -> bool {
        self.menu_links.iter().any(|l| l.slug.as_deref() == Some(slug))
    }

    pub fn link_for(&self, slug: &str) -> Option<&MenuPageLink> {
        self.menu_links.iter().find(|l| l.slug.as_deref() == Some(slug))
    }

    pub fn orphans(&self) -> impl Iterator<Item = &PageStatus> {
        self.pages.iter().filter(|p| p.not_in_menu)
    }
}

/// Matches every Informasi sub-menu row to a page by slug.
///
/// `informasi_children` are the rows whose parent is the "Informasi" menu;
/// `pages` is the full `informasi_pages` table.
pub fn sync_informasi(informasi_children: &[NavigationMenu], pages: Vec<InformasiPage>) -> InformasiSync {
    let by_slug: HashMap<&str, &InformasiPage> = pages.iter().map(|p| (p.slug.as_str(), p)).collect();

    let menu_links: Vec<MenuPageLink> = informasi_children
        .iter()
        .map(|menu| {
            let slug = slug_from_href(&menu.href);
            MenuPageLink {
                menu_id: menu.id,
                menu_title: menu.title.clone(),
                href: menu.href.clone(),
                slug: slug.map(str::to_string),
                page_id: slug.and_then(|s| by_slug.get(s)).map(|p| p.id),
            }
        })
        .collect();

    let title_by_slug: HashMap<&str, &str> = menu_links
        .iter()
        .filter_map(|l| l.slug.as_deref().map(|s| (s, l.menu_title.as_str())))
        .collect();

    let pages = pages
        .iter()
        .map(|page| {
            let menu_title = title_by_slug.get(page.slug.as_str()).map(|t| t.to_string());
            PageStatus {
                not_in_menu: menu_title.is_none(),
                menu_title,
                page: page.clone(),
            }
        })
        .collect();

    InformasiSync { menu_links, pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(title: &str, href: &str, parent_id: Option<Uuid>) -> NavigationMenu {
        NavigationMenu {
            id: Uuid::new_v4(),
            title: title.to_string(),
            href: href.to_string(),
            parent_id,
            order: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn page(slug: &str) -> InformasiPage {
        InformasiPage::new(
            slug,
            InformasiPageInput { title: slug.to_uppercase(), content: "<p>isi</p>".to_string() },
        )
        .unwrap()
    }

    #[test]
    fn test_slug_from_href() {
        assert_eq!(slug_from_href("/informasi/berita"), Some("berita"));
        assert_eq!(slug_from_href("/informasi/profil-ppid/"), Some("profil-ppid"));
        assert_eq!(slug_from_href("/informasi/sop?tab=1#top"), Some("sop"));
        assert_eq!(slug_from_href("/informasi/"), None);
        assert_eq!(slug_from_href("/informasi/a/b"), None);
        assert_eq!(slug_from_href("/program/renstra"), None);
        assert_eq!(slug_from_href("https://example.go.id/informasi/x"), None);
    }

    #[test]
    fn test_menu_entry_finds_page() {
        let root = menu("Informasi", "#", None);
        let child = menu("Berita", "/informasi/berita", Some(root.id));
        let berita = page("berita");

        let sync = sync_informasi(&[child.clone()], vec![berita.clone()]);

        assert_eq!(sync.menu_links.len(), 1);
        assert_eq!(sync.menu_links[0].page_id, Some(berita.id));
        assert_eq!(sync.pages.len(), 1);
        assert!(!sync.pages[0].not_in_menu);
        assert_eq!(sync.pages[0].menu_title.as_deref(), Some("Berita"));
        assert!(sync.is_editable("berita"));
    }

    #[test]
    fn test_page_without_menu_is_flagged() {
        let sync = sync_informasi(&[], vec![page("arsip-lama")]);
        assert!(sync.pages[0].not_in_menu);
        assert!(!sync.is_editable("arsip-lama"));
        assert_eq!(sync.orphans().count(), 1);
    }

    #[test]
    fn test_menu_without_page_has_no_page_id() {
        let child = menu("SOP", "/informasi/sop", None);
        let sync = sync_informasi(&[child], vec![]);
        assert_eq!(sync.menu_links[0].slug.as_deref(), Some("sop"));
        assert!(!sync.menu_links[0].has_page());
        assert!(sync.is_editable("sop"));
    }

    #[test]
    fn test_external_sub_menu_has_no_slug() {
        let child = menu("LPSE", "https://lpse.example.go.id", None);
        let sync = sync_informasi(&[child], vec![page("lpse")]);
        assert_eq!(sync.menu_links[0].slug, None);
        assert!(sync.pages[0].not_in_menu);
    }
}
