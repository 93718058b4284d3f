// ============================================================================
// Kominfo API - Router
// File: crates/kominfo-api/src/routes.rs
// ============================================================================

use std::path::PathBuf;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::warn;

use kominfo_core::domain::{
    Agenda, Announcement, Document, Gallery, Pegawai, Post, ProgramDocument, ServiceItem,
};
use kominfo_shared::config::AppConfig;

use crate::handlers::content::{admin_routes, public_get, public_routes};
use crate::handlers::{accessibility, auth, health, informasi, menus, pages, public, settings, uploads, visitor};
use crate::middleware::require_admin;
use crate::state::AppState;

// Multipart framing on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Router settings taken from the `app` and `storage` config sections.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub cors_origins: Vec<String>,
    pub storage_root: PathBuf,
    pub public_path: String,
    pub max_upload_bytes: usize,
}

impl RouterOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            cors_origins: config.app.cors_origins.clone(),
            storage_root: PathBuf::from(&config.storage.root_dir),
            public_path: config.storage.public_path.clone(),
            max_upload_bytes: config.storage.max_upload_bytes,
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn admin_router(state: &AppState, options: &RouterOptions) -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/menus", get(menus::tree).post(menus::create))
        .route("/menus/{id}", get(menus::get).put(menus::update).delete(menus::delete))
        .route("/informasi", get(informasi::overview))
        .route("/informasi/{slug}", get(informasi::editor).put(informasi::save))
        .route("/informasi/pages/{id}", delete(informasi::delete))
        .route("/settings", get(settings::get).put(settings::update))
        .route(
            "/uploads/{bucket}",
            post(uploads::upload).layer(DefaultBodyLimit::max(options.max_upload_bytes + MULTIPART_OVERHEAD_BYTES)),
        )
        .nest("/posts", admin_routes::<Post>())
        .nest("/announcements", admin_routes::<Announcement>())
        .nest("/agenda", admin_routes::<Agenda>())
        .nest("/services", admin_routes::<ServiceItem>())
        .nest("/galleries", admin_routes::<Gallery>())
        .nest("/documents", admin_routes::<Document>())
        .nest("/program-documents", admin_routes::<ProgramDocument>())
        .nest("/pegawai", admin_routes::<Pegawai>())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}

fn public_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/login", post(auth::login))
        .route("/menus", get(public::header_menu))
        .route("/settings", get(public::site_settings))
        .route("/informasi/{slug}", get(public::informasi_page))
        .route("/accessibility", get(accessibility::current).post(accessibility::apply))
        .route("/visitor-stats", get(visitor::stats))
        .route("/visitor-stats/hit", post(visitor::hit))
        .route("/youtube", get(visitor::youtube))
        .nest("/posts", public_routes::<Post>().route("/{slug}", get(public::post_by_slug)))
        .nest(
            "/announcements",
            public_routes::<Announcement>().route("/{id}", get(public_get::<Announcement>)),
        )
        .route("/agenda", get(public::agenda_by_day))
        .route("/agenda/{id}", get(public_get::<Agenda>))
        .nest("/services", public_routes::<ServiceItem>())
        .nest("/galleries", public_routes::<Gallery>().route("/{id}", get(public_get::<Gallery>)))
        .nest(
            "/documents",
            public_routes::<Document>()
                .route("/{id}", get(public_get::<Document>))
                .route("/{id}/download", get(public::download_document)),
        )
        .route("/program/{program}/documents", get(public::program_documents))
        .nest("/pegawai", public_routes::<Pegawai>())
}

pub fn build_router(state: AppState, options: &RouterOptions) -> Router {
    let storage_path = format!("/{}", options.public_path.trim_matches('/'));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/informasi/{slug}", get(pages::informasi))
        .route("/kontak", get(pages::kontak))
        .nest("/api/admin", admin_router(&state, options))
        .nest("/api", public_api_router())
        .nest_service(&storage_path, ServeDir::new(&options.storage_root))
        .fallback(pages::fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.cors_origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::{FixedOffset, Utc};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use kominfo_core::domain::{ContentEntity, InformasiPage, NavigationMenu};
    use kominfo_core::repositories::*;
    use kominfo_core::services::{
        AuthService, ContentService, DocumentService, InformasiService, MediaService, MenuService, PostService,
        SiteSettingsService, VideoService, VisitorService,
    };
    use kominfo_security::JwtService;

    use crate::views::Views;

    const SECRET: &str = "test-secret";

    /// One mock per port; tests set expectations before building the state.
    #[derive(Default)]
    struct TestRepos {
        menus: MockMenuRepository,
        pages: MockInformasiPageRepository,
        settings: MockSiteSettingRepository,
        visitors: MockVisitorRepository,
    }

    fn content<T: ContentEntity>(offset: FixedOffset) -> Arc<ContentService<T>> {
        let repo: Arc<dyn ContentRepository<T>> = Arc::new(MockContentRepository::<T>::new());
        Arc::new(ContentService::new(repo, offset))
    }

    impl TestRepos {
        fn into_state(self) -> AppState {
            let offset = FixedOffset::east_opt(7 * 3600).unwrap();
            let menus: Arc<dyn MenuRepository> = Arc::new(self.menus);

            AppState {
                auth: Arc::new(AuthService::new(
                    Arc::new(MockAdminUserRepository::new()),
                    JwtService::new(SECRET.into(), 3600),
                )),
                menus: Arc::new(MenuService::new(menus.clone())),
                informasi: Arc::new(InformasiService::new(menus, Arc::new(self.pages))),
                posts: Arc::new(PostService::new(content(offset), Arc::new(MockPostRepository::new()))),
                announcements: content(offset),
                agenda: content(offset),
                services: content(offset),
                galleries: content(offset),
                documents: Arc::new(DocumentService::new(content(offset), Arc::new(MockDocumentRepository::new()))),
                program_documents: content(offset),
                pegawai: content(offset),
                settings: Arc::new(SiteSettingsService::new(Arc::new(self.settings))),
                media: Arc::new(MediaService::new(Arc::new(MockObjectStorage::new()), 1024)),
                visitors: Arc::new(VisitorService::new(Arc::new(self.visitors), offset)),
                videos: Arc::new(VideoService::new(None, 6)),
                views: Arc::new(Views::new().unwrap()),
            }
        }

        fn into_router(self) -> Router {
            let options = RouterOptions {
                cors_origins: vec!["http://localhost:3000".into()],
                storage_root: std::env::temp_dir(),
                public_path: "/uploads".into(),
                max_upload_bytes: 1024,
            };
            build_router(self.into_state(), &options)
        }
    }

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

    fn informasi_menus() -> Vec<NavigationMenu> {
        let root = menu("Informasi", "#", None, 2);
        let profil = menu("Profil", "/informasi/profil", Some(root.id), 1);
        vec![menu("Beranda", "/", None, 1), root, profil]
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = TestRepos::default().into_router().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_admin_routes_require_token() {
        let response = TestRepos::default().into_router().oneshot(get("/api/admin/menus")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_admin_menu_tree_with_token() {
        let mut repos = TestRepos::default();
        repos.menus.expect_list_all().times(1).returning(|| Ok(informasi_menus()));

        let token = JwtService::new(SECRET.into(), 3600)
            .generate_access_token(&Uuid::new_v4(), "admin@kominfo.go.id")
            .unwrap();
        let request = Request::builder()
            .uri("/api/admin/menus")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = repos.into_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let roots = body["data"].as_array().unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1]["title"], "Informasi");
        assert_eq!(roots[1]["children"][0]["href"], "/informasi/profil");
    }

    #[tokio::test]
    async fn test_informasi_page_renders_html_and_counts_visit() {
        let mut repos = TestRepos::default();
        repos.menus.expect_list_active().returning(|| Ok(informasi_menus()));
        repos.settings.expect_list_all().returning(|| Ok(Vec::new()));
        repos.visitors.expect_record_visit().times(1).returning(|_| Ok(1));
        repos.pages.expect_find_by_slug().returning(|slug| {
            Ok(Some(InformasiPage {
                id: Uuid::new_v4(),
                slug: slug.to_string(),
                title: "Profil Dinas".into(),
                content: "<p>Tugas pokok dan fungsi</p>".into(),
                created_at: Utc::now(),
                updated_at: None,
            }))
        });

        let response = repos.into_router().oneshot(get("/informasi/profil")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<p>Tugas pokok dan fungsi</p>"));
        assert!(html.contains("Profil Dinas"));
    }

    #[tokio::test]
    async fn test_unlinked_informasi_slug_is_not_found_and_not_counted() {
        let mut repos = TestRepos::default();
        repos.menus.expect_list_active().returning(|| Ok(informasi_menus()));
        repos.settings.expect_list_all().returning(|| Ok(Vec::new()));
        repos.visitors.expect_record_visit().never();
        repos.pages.expect_find_by_slug().never();

        let response = repos.into_router().oneshot(get("/informasi/struktur")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Halaman tidak ditemukan"));
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_not_found() {
        let response = TestRepos::default().into_router().oneshot(get("/api/tidak-ada")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_agenda_rejects_bad_month() {
        let response = TestRepos::default().into_router().oneshot(get("/api/agenda?month=juni")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_youtube_without_feed_is_empty_list() {
        let response = TestRepos::default().into_router().oneshot(get("/api/youtube")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}
