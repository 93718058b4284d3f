// ============================================================================
// Kominfo API - HTML Views
// File: crates/kominfo-api/src/views.rs
// ============================================================================
//! Server rendered public pages (handlebars, templates compiled in)

use chrono::{DateTime, FixedOffset, Utc};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use kominfo_core::domain::{AccessibilitySettings, MenuNode, SiteSettings};
use kominfo_core::services::PublicPage;

const LAYOUT: &str = "layout";
const INFORMASI_PAGE: &str = "informasi_page";
const KONTAK: &str = "kontak";
const NOT_FOUND: &str = "not_found";

/// Header, footer and accessibility hooks shared by every page.
#[derive(Debug, Clone, Serialize)]
pub struct Chrome {
    pub site_name: String,
    pub tagline: Option<String>,
    pub footer_text: String,
    pub menus: Vec<MenuNode>,
    pub a11y_classes: String,
    pub a11y_style: Option<String>,
}

impl Chrome {
    pub fn new(settings: &SiteSettings, menus: Vec<MenuNode>, a11y: &AccessibilitySettings) -> Self {
        let value = |key: &str| settings.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let site_name = value("site_name").unwrap_or("Diskominfo").to_string();
        let footer_text = value("footer_text")
            .map(str::to_string)
            .unwrap_or_else(|| format!("© {} {}", Utc::now().format("%Y"), site_name));

        Self {
            tagline: value("site_tagline").map(str::to_string),
            footer_text,
            site_name,
            menus,
            a11y_classes: a11y.css_classes().join(" "),
            a11y_style: a11y.root_style(),
        }
    }
}

#[derive(Serialize)]
struct PageContext<'a, B: Serialize> {
    #[serde(flatten)]
    chrome: &'a Chrome,
    title: &'a str,
    #[serde(flatten)]
    body: B,
}

#[derive(Serialize)]
struct InformasiBody<'a> {
    menu_title: &'a str,
    content: &'a str,
    updated_at: Option<String>,
}

#[derive(Serialize)]
struct KontakBody<'a> {
    settings: &'a SiteSettings,
}

#[derive(Serialize)]
struct EmptyBody {}

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_partial(LAYOUT, include_str!("../templates/layout.hbs"))?;
        registry.register_template_string(INFORMASI_PAGE, include_str!("../templates/informasi_page.hbs"))?;
        registry.register_template_string(KONTAK, include_str!("../templates/kontak.hbs"))?;
        registry.register_template_string(NOT_FOUND, include_str!("../templates/not_found.hbs"))?;
        Ok(Self { registry })
    }

    /// Page content is editor HTML and is written unescaped.
    pub fn informasi_page(
        &self,
        chrome: &Chrome,
        page: &PublicPage,
        offset: FixedOffset,
    ) -> Result<String, RenderError> {
        let updated_at = page
            .page
            .updated_at
            .map(|at: DateTime<Utc>| at.with_timezone(&offset).format("%d-%m-%Y %H:%M").to_string());
        self.registry.render(
            INFORMASI_PAGE,
            &PageContext {
                chrome,
                title: &page.page.title,
                body: InformasiBody {
                    menu_title: &page.menu_title,
                    content: &page.page.content,
                    updated_at,
                },
            },
        )
    }

    pub fn kontak(&self, chrome: &Chrome, settings: &SiteSettings) -> Result<String, RenderError> {
        self.registry.render(
            KONTAK,
            &PageContext { chrome, title: "Kontak", body: KontakBody { settings } },
        )
    }

    pub fn not_found(&self, chrome: &Chrome) -> Result<String, RenderError> {
        self.registry.render(
            NOT_FOUND,
            &PageContext { chrome, title: "Halaman tidak ditemukan", body: EmptyBody {} },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kominfo_core::domain::accessibility::ContrastMode;
    use kominfo_core::domain::{build_menu_tree, AccessibilityAction, InformasiPage, NavigationMenu};
    use uuid::Uuid;

    fn menu(title: &str, href: &str, parent_id: Option<Uuid>, order: i32) -> NavigationMenu {
        NavigationMenu {
            id: Uuid::new_v4(),
            title: title.into(),
            href: href.into(),
            parent_id,
            order,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn chrome(a11y: &AccessibilitySettings) -> Chrome {
        let root = menu("Informasi", "#", None, 1);
        let child = menu("Profil", "/informasi/profil", Some(root.id), 1);
        let mut settings = SiteSettings::new();
        settings.insert("site_name".into(), "Diskominfo Kota".into());
        settings.insert("footer_text".into(), "Hak cipta Diskominfo".into());
        Chrome::new(&settings, build_menu_tree(vec![root, child]), a11y)
    }

    #[test]
    fn test_informasi_page_renders_menu_content_and_a11y() {
        let mut a11y = AccessibilitySettings::default();
        a11y.apply(AccessibilityAction::SetContrast(ContrastMode::High));
        a11y.apply(AccessibilityAction::IncreaseFont);

        let page = PublicPage {
            menu_title: "Profil".into(),
            page: InformasiPage {
                id: Uuid::new_v4(),
                slug: "profil".into(),
                title: "Profil Dinas".into(),
                content: "<p><strong>Tugas</strong> pokok</p>".into(),
                created_at: Utc::now(),
                updated_at: None,
            },
        };

        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let html = Views::new().unwrap().informasi_page(&chrome(&a11y), &page, offset).unwrap();

        assert!(html.contains("<title>Profil Dinas | Diskominfo Kota</title>"));
        assert!(html.contains(r#"<a href="/informasi/profil">Profil</a>"#));
        assert!(html.contains("<p><strong>Tugas</strong> pokok</p>"));
        assert!(html.contains("font-size: 110%;"));
        for class in a11y.css_classes() {
            assert!(html.contains(class), "{class}");
        }
        assert!(html.contains("Hak cipta Diskominfo"));
    }

    #[test]
    fn test_not_found_page() {
        let html = Views::new().unwrap().not_found(&chrome(&AccessibilitySettings::default())).unwrap();
        assert!(html.contains("Halaman tidak ditemukan"));
        assert!(!html.contains("style=\""));
    }
}
