//!
//! Restaurant reservation HTTP service.
//! Reads configuration from TOML file (~/.config/tablebook/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use tablebook::application::{AvailabilityService, ReservationService, TableDateLocks};
use tablebook::domain::RepositoryProvider;
use tablebook::infrastructure::database::migrator::Migrator;
use tablebook::infrastructure::database::seed::seed_demo_data;
use tablebook::shared::shutdown::{listen_for_shutdown_signals, ShutdownSignal};
use tablebook::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("TABLEBOOK_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Tablebook reservation service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Repository provider over the shared connection pool
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    if app_cfg.booking.seed_demo_data {
        if let Err(e) = seed_demo_data(repos.as_ref()).await {
            error!("Demo data seeding failed: {}", e);
        }
    }

    // ── Services ───────────────────────────────────────────────
    let locks = Arc::new(TableDateLocks::new());
    let availability = Arc::new(AvailabilityService::new(repos.clone()));
    let reservations = Arc::new(ReservationService::new(
        repos.clone(),
        locks,
        app_cfg.booking.cancellation_window_hours,
    ));

    let router = create_api_router(db.clone(), availability, reservations);

    // ── HTTP server with graceful shutdown ─────────────────────
    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    let address = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on http://{}", address);
    info!("Swagger UI at http://{}/docs", address);

    let shutdown_wait = shutdown.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown_wait.wait().await })
        .await?;

    info!("Server stopped, closing database connection");
    db.close().await?;
    Ok(())
}
