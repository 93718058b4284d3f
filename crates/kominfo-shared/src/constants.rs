//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 28800;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Href prefix of every sub-menu under the "Informasi" navigation item.
pub const INFORMASI_PREFIX: &str = "/informasi/";
pub const INFORMASI_MENU_TITLE: &str = "Informasi";

/// Local-storage key (and cookie payload) of the accessibility panel.
pub const ACCESSIBILITY_STORAGE_KEY: &str = "accessibility-settings";
pub const ACCESSIBILITY_COOKIE: &str = "a11y";

/// WIB (UTC+7).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;
pub const VISITOR_STATS_DAYS: u32 = 7;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
