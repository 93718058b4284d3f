//! PostgreSQL repository implementations

pub mod admin_user_repo_impl;
pub mod content_repo_impl;
pub mod informasi_repo_impl;
pub mod menu_repo_impl;
pub mod records;
pub mod site_setting_repo_impl;
pub mod visitor_repo_impl;

use tracing::error;

use kominfo_core::error::DomainError;

pub use admin_user_repo_impl::PgAdminUserRepository;
pub use content_repo_impl::{PgContentRepository, PgRecord};
pub use informasi_repo_impl::PgInformasiPageRepository;
pub use menu_repo_impl::PgMenuRepository;
pub use records::{
    PgAgendaRepository, PgAnnouncementRepository, PgDocumentRepository, PgGalleryRepository, PgPegawaiRepository,
    PgPostRepository, PgProgramDocumentRepository, PgServiceItemRepository,
};
pub use site_setting_repo_impl::PgSiteSettingRepository;
pub use visitor_repo_impl::PgVisitorRepository;

/// Logs and maps a sqlx error. Unique violations become `SlugAlreadyExists`
/// carrying the constraint name.
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or(context).to_string();
            return DomainError::SlugAlreadyExists(constraint);
        }
    }
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}
