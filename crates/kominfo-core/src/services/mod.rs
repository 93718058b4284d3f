//! Domain services

pub mod auth_service;
pub mod content_service;
pub mod informasi_service;
pub mod media_service;
pub mod menu_service;
pub mod post_service;
pub mod site_settings_service;
pub mod video_service;
pub mod visitor_service;

pub use auth_service::AuthService;
pub use content_service::{ContentService, ListingFilters};
pub use informasi_service::{InformasiService, PageEditor, PublicPage};
pub use media_service::MediaService;
pub use menu_service::MenuService;
pub use post_service::{DocumentService, PostService};
pub use site_settings_service::SiteSettingsService;
pub use video_service::VideoService;
pub use visitor_service::VisitorService;
