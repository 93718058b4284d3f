// ============================================================================
// Kominfo Core - Informasi Page Service
// File: crates/kominfo-core/src/services/informasi_service.rs
// ============================================================================
//! Pages under the "Informasi" menu: editable only while a sub-menu links them

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use kominfo_shared::constants::INFORMASI_MENU_TITLE;

use crate::domain::{sync_informasi, InformasiPage, InformasiPageInput, InformasiSync, NavigationMenu};
use crate::error::DomainError;
use crate::repositories::{InformasiPageRepository, MenuRepository};

/// What the page editor opens with.
#[derive(Debug, Clone, Serialize)]
pub struct PageEditor {
    pub slug: String,
    pub menu_title: String,
    /// `None` until the first save
    pub page: Option<InformasiPage>,
}

/// A page as shown on the public site.
#[derive(Debug, Clone, Serialize)]
pub struct PublicPage {
    pub menu_title: String,
    pub page: InformasiPage,
}

pub struct InformasiService {
    menus: Arc<dyn MenuRepository>,
    pages: Arc<dyn InformasiPageRepository>,
}

/// Rows directly under the first top-level "Informasi" item, in menu order.
fn informasi_children(mut rows: Vec<NavigationMenu>) -> Vec<NavigationMenu> {
    rows.sort_by_key(|m| m.order);
    let Some(root_id) = rows
        .iter()
        .find(|m| m.is_root_menu() && m.title.trim().eq_ignore_ascii_case(INFORMASI_MENU_TITLE))
        .map(|m| m.id)
    else {
        return Vec::new();
    };
    rows.into_iter().filter(|m| m.parent_id == Some(root_id)).collect()
}

impl InformasiService {
    pub fn new(menus: Arc<dyn MenuRepository>, pages: Arc<dyn InformasiPageRepository>) -> Self {
        Self { menus, pages }
    }

    /// Admin overview: every sub-menu link with its page, every page with its menu.
    /// Hidden menu items still count as links here.
    pub async fn overview(&self) -> Result<InformasiSync, DomainError> {
        let (menus, pages) = tokio::try_join!(self.menus.list_all(), self.pages.list_all())?;
        Ok(sync_informasi(&informasi_children(menus), pages))
    }

    pub async fn page_for_edit(&self, slug: &str) -> Result<PageEditor, DomainError> {
        let sync = self.overview().await?;
        let link = sync.link_for(slug).ok_or_else(|| {
            warn!("Blocked editing of orphaned page: {}", slug);
            DomainError::PageNotInMenu(slug.to_string())
        })?;
        let menu_title = link.menu_title.clone();

        let page = self.pages.find_by_slug(slug).await?;
        Ok(PageEditor { slug: slug.to_string(), menu_title, page })
    }

    /// Creates the row on first save of a linked slug.
    pub async fn save(&self, slug: &str, input: InformasiPageInput) -> Result<InformasiPage, DomainError> {
        let sync = self.overview().await?;
        if !sync.is_editable(slug) {
            warn!("Blocked saving of orphaned page: {}", slug);
            return Err(DomainError::PageNotInMenu(slug.to_string()));
        }

        match self.pages.find_by_slug(slug).await? {
            Some(mut page) => {
                page.apply(input)?;
                let saved = self.pages.update(&page).await?;
                info!("Informasi page updated: {}", slug);
                Ok(saved)
            }
            None => {
                let page = InformasiPage::new(slug, input)?;
                let saved = self.pages.create(&page).await?;
                info!("Informasi page created: {}", slug);
                Ok(saved)
            }
        }
    }

    /// Orphans can still be deleted; that is how the admin cleans them up.
    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if !self.pages.delete(id).await? {
            return Err(DomainError::not_found("InformasiPage", *id));
        }
        info!("Informasi page deleted: {}", id);
        Ok(())
    }

    /// Only pages linked from an active sub-menu are public.
    pub async fn public_page(&self, slug: &str) -> Result<PublicPage, DomainError> {
        let children = informasi_children(self.menus.list_active().await?);
        let sync = sync_informasi(&children, Vec::new());
        let menu_title = sync
            .link_for(slug)
            .map(|l| l.menu_title.clone())
            .ok_or_else(|| DomainError::PageNotFound(slug.to_string()))?;

        let page = self
            .pages
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::PageNotFound(slug.to_string()))?;
        Ok(PublicPage { menu_title, page })
    }
}
