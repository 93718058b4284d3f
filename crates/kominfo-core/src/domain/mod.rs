pub mod accessibility;
pub mod admin_user;
pub mod agenda;
pub mod announcement;
pub mod content;
pub mod document;
pub mod gallery;
pub mod informasi_page;
pub mod listing;
pub mod media;
pub mod navigation_menu;
pub mod pegawai;
pub mod post;
pub mod rich_text;
pub mod service_item;
pub mod site_setting;
pub mod video;
pub mod visitor;

pub use accessibility::{AccessibilityAction, AccessibilitySettings};
pub use admin_user::{AdminUser, LoginRequest, LoginResponse, NewAdminUser};
pub use agenda::{group_agenda_by_day, Agenda, AgendaDay, AgendaInput, AgendaMode};
pub use announcement::{Announcement, AnnouncementInput};
pub use content::{local_offset, ContentEntity};
pub use document::{Document, DocumentInput, ProgramDocument, ProgramDocumentInput};
pub use gallery::{Gallery, GalleryInput};
pub use informasi_page::{
    slug_from_href, sync_informasi, InformasiPage, InformasiPageInput, InformasiSync, MenuPageLink, PageStatus,
};
pub use listing::{apply_listing, AdminListQuery, ListQuery, Listable, SortOrder};
pub use media::{MediaBucket, UploadedFile};
pub use navigation_menu::{build_menu_tree, MenuNode, NavigationMenu, NavigationMenuInput};
pub use pegawai::{Pegawai, PegawaiInput};
pub use post::{Post, PostInput};
pub use service_item::{ServiceItem, ServiceItemInput};
pub use site_setting::{SiteSetting, SiteSettings};
pub use video::YoutubeVideo;
pub use visitor::{DailyCount, VisitorStats};
