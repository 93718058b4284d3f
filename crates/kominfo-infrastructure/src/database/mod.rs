//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::{create_pool, run_migrations};
pub use postgres::{
    PgAdminUserRepository, PgAgendaRepository, PgAnnouncementRepository, PgContentRepository, PgDocumentRepository,
    PgGalleryRepository, PgInformasiPageRepository, PgMenuRepository, PgPegawaiRepository, PgPostRepository,
    PgProgramDocumentRepository, PgServiceItemRepository, PgSiteSettingRepository, PgVisitorRepository,
};
