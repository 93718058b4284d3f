//! Repository traits (ports)

pub mod admin_user_repository;
pub mod content_repository;
pub mod informasi_repository;
pub mod menu_repository;
pub mod object_storage;
pub mod site_setting_repository;
pub mod video_source;
pub mod visitor_repository;

pub use admin_user_repository::AdminUserRepository;
pub use content_repository::{ContentRepository, DocumentRepository, PostRepository};
pub use informasi_repository::InformasiPageRepository;
pub use menu_repository::MenuRepository;
pub use object_storage::ObjectStorage;
pub use site_setting_repository::SiteSettingRepository;
pub use video_source::VideoSource;
pub use visitor_repository::VisitorRepository;

#[cfg(any(test, feature = "mocks"))]
pub use admin_user_repository::MockAdminUserRepository;
#[cfg(any(test, feature = "mocks"))]
pub use content_repository::{MockContentRepository, MockDocumentRepository, MockPostRepository};
#[cfg(any(test, feature = "mocks"))]
pub use informasi_repository::MockInformasiPageRepository;
#[cfg(any(test, feature = "mocks"))]
pub use menu_repository::MockMenuRepository;
#[cfg(any(test, feature = "mocks"))]
pub use object_storage::MockObjectStorage;
#[cfg(any(test, feature = "mocks"))]
pub use site_setting_repository::MockSiteSettingRepository;
#[cfg(any(test, feature = "mocks"))]
pub use video_source::MockVideoSource;
#[cfg(any(test, feature = "mocks"))]
pub use visitor_repository::MockVisitorRepository;
