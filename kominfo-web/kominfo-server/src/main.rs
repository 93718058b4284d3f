use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};

use kominfo_api::{build_router, AppState, RouterOptions, Views};
use kominfo_core::domain::{
    local_offset, Agenda, Announcement, Document, Gallery, NewAdminUser, Pegawai, Post, ProgramDocument, ServiceItem,
};
use kominfo_core::repositories::{MenuRepository, VideoSource};
use kominfo_core::services::{
    AuthService, ContentService, DocumentService, InformasiService, MediaService, MenuService, PostService,
    SiteSettingsService, VideoService, VisitorService,
};
use kominfo_infrastructure::{
    create_pool, run_migrations, LocalObjectStorage, PgAdminUserRepository, PgAgendaRepository,
    PgAnnouncementRepository, PgDocumentRepository, PgGalleryRepository, PgInformasiPageRepository, PgMenuRepository,
    PgPegawaiRepository, PgPostRepository, PgProgramDocumentRepository, PgServiceItemRepository,
    PgSiteSettingRepository, PgVisitorRepository, YoutubeClient,
};
use kominfo_security::JwtService;
use kominfo_shared::config::{AppConfig, AuthSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = kominfo_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(&config.database).await.context("database connection failed")?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await.context("database migrations failed")?;
    }

    let offset = local_offset(config.app.utc_offset_hours);

    // Repositories
    let menus: Arc<dyn MenuRepository> = Arc::new(PgMenuRepository::new(pool.clone()));
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let document_repo = Arc::new(PgDocumentRepository::new(pool.clone()));

    // Services
    let auth = AuthService::new(
        Arc::new(PgAdminUserRepository::new(pool.clone())),
        JwtService::new(config.jwt.secret.clone(), config.jwt.access_token_expiry),
    );
    bootstrap_admin(&auth, &config.auth).await;

    let video_source = YoutubeClient::from_settings(&config.youtube)?.map(|c| Arc::new(c) as Arc<dyn VideoSource>);
    let storage = LocalObjectStorage::new(&config.storage.root_dir, &config.storage.public_path);

    let state = AppState {
        auth: Arc::new(auth),
        menus: Arc::new(MenuService::new(menus.clone())),
        informasi: Arc::new(InformasiService::new(
            menus,
            Arc::new(PgInformasiPageRepository::new(pool.clone())),
        )),
        posts: Arc::new(PostService::new(Arc::new(ContentService::<Post>::new(post_repo.clone(), offset)), post_repo)),
        announcements: Arc::new(ContentService::<Announcement>::new(Arc::new(PgAnnouncementRepository::new(pool.clone())), offset)),
        agenda: Arc::new(ContentService::<Agenda>::new(Arc::new(PgAgendaRepository::new(pool.clone())), offset)),
        services: Arc::new(ContentService::<ServiceItem>::new(Arc::new(PgServiceItemRepository::new(pool.clone())), offset)),
        galleries: Arc::new(ContentService::<Gallery>::new(Arc::new(PgGalleryRepository::new(pool.clone())), offset)),
        documents: Arc::new(DocumentService::new(
            Arc::new(ContentService::<Document>::new(document_repo.clone(), offset)),
            document_repo,
        )),
        program_documents: Arc::new(ContentService::<ProgramDocument>::new(
            Arc::new(PgProgramDocumentRepository::new(pool.clone())),
            offset,
        )),
        pegawai: Arc::new(ContentService::<Pegawai>::new(Arc::new(PgPegawaiRepository::new(pool.clone())), offset)),
        settings: Arc::new(SiteSettingsService::new(Arc::new(PgSiteSettingRepository::new(pool.clone())))),
        media: Arc::new(MediaService::new(Arc::new(storage), config.storage.max_upload_bytes)),
        visitors: Arc::new(VisitorService::new(Arc::new(PgVisitorRepository::new(pool)), offset)),
        videos: Arc::new(VideoService::new(video_source, config.youtube.max_results)),
        views: Arc::new(Views::new().context("template registration failed")?),
    };

    // Build router
    let app = build_router(state, &RouterOptions::from_config(&config));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {} ({})", addr, config.app.public_base_url);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

/// Creates the first admin account when credentials are configured and the
/// account table is empty.
async fn bootstrap_admin(auth: &AuthService, settings: &AuthSettings) {
    let (Some(email), Some(password)) = (&settings.bootstrap_email, &settings.bootstrap_password) else {
        return;
    };

    let new_user = NewAdminUser {
        email: email.clone(),
        password: password.clone(),
        display_name: settings.bootstrap_display_name.clone(),
    };
    match auth.ensure_bootstrap_admin(new_user).await {
        Ok(Some(_)) => warn!("Bootstrap admin created; change its password and remove the bootstrap credentials"),
        Ok(None) => {}
        Err(e) => error!("Failed to create bootstrap admin: {}", e),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
