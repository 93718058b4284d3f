// ============================================================================
// Kominfo API - Application State
// File: crates/kominfo-api/src/state.rs
// ============================================================================

use std::sync::Arc;

use kominfo_core::domain::{Agenda, Announcement, Gallery, Pegawai, ProgramDocument, ServiceItem};
use kominfo_core::services::{
    AuthService, ContentService, DocumentService, InformasiService, MediaService, MenuService, PostService,
    SiteSettingsService, VideoService, VisitorService,
};

use crate::views::Views;

/// Every service the handlers reach, shared behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub menus: Arc<MenuService>,
    pub informasi: Arc<InformasiService>,
    pub posts: Arc<PostService>,
    pub announcements: Arc<ContentService<Announcement>>,
    pub agenda: Arc<ContentService<Agenda>>,
    pub services: Arc<ContentService<ServiceItem>>,
    pub galleries: Arc<ContentService<Gallery>>,
    pub documents: Arc<DocumentService>,
    pub program_documents: Arc<ContentService<ProgramDocument>>,
    pub pegawai: Arc<ContentService<Pegawai>>,
    pub settings: Arc<SiteSettingsService>,
    pub media: Arc<MediaService>,
    pub visitors: Arc<VisitorService>,
    pub videos: Arc<VideoService>,
    pub views: Arc<Views>,
}
