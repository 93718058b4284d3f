//! # Kominfo Infrastructure
//!
//! Adapters: PostgreSQL repositories, local object storage and the YouTube
//! Data API client.

pub mod database;
pub mod storage;
pub mod youtube;

pub use database::{
    create_pool, run_migrations, PgAdminUserRepository, PgAgendaRepository, PgAnnouncementRepository,
    PgContentRepository, PgDocumentRepository, PgGalleryRepository, PgInformasiPageRepository, PgMenuRepository,
    PgPegawaiRepository, PgPostRepository, PgProgramDocumentRepository, PgServiceItemRepository,
    PgSiteSettingRepository, PgVisitorRepository,
};
pub use storage::LocalObjectStorage;
pub use youtube::YoutubeClient;
