//! MediaHost Server: tenant folders and content delivery for media hosts.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use mediahost_core::config::AppConfig;
use mediahost_core::error::AppError;
use mediahost_database::{DatabasePool, MetadataStore, PgMetadataStore};
use mediahost_storage::StorageManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, details = ?e.diagnostic(), "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `MEDIAHOST_ENV` overlay and `MEDIAHOST__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("MEDIAHOST_ENV").unwrap_or_else(|_| "development".to_string());
    let mut config = AppConfig::load(&env)?;

    // DATABASE_URL is honoured for compatibility with sqlx tooling.
    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = url;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting MediaHost");

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    mediahost_database::migration::run_migrations(db.pool()).await?;
    let store: Arc<dyn MetadataStore> = Arc::new(PgMetadataStore::new(db.pool().clone()));

    // ── Step 2: Storage providers ────────────────────────────────
    let storage = StorageManager::from_config(&config.storage);
    for (host_id, healthy) in storage.health_check_all().await {
        if healthy {
            tracing::info!(host_id, "Storage mount available");
        } else {
            tracing::warn!(host_id, "Storage mount unavailable; folder operations on it will be metadata-only");
        }
    }

    // ── Step 3: Services + HTTP server ───────────────────────────
    let state = mediahost_api::AppState::new(config, store, storage);
    let result = mediahost_api::run_server(state).await;

    // ── Step 4: Release resources ────────────────────────────────
    db.close().await;
    tracing::info!("MediaHost shut down");
    result
}
