pub mod analytics; // Per-patient visit timeline and health trend
pub mod api; // HTTP API under /api
pub mod authorization; // Staff login
pub mod config;
pub mod db;
pub mod deep_query; // Question → departments → recent evidence
pub mod models;
pub mod search; // Patient search and department listings
pub mod seed; // Sample data

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{start_api_server, ApiContext, ServerError};
use crate::config::{ConfigError, ServerConfig};
use crate::db::{DatabaseError, SqliteRecordStore};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Run the API server until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServerConfig::from_env()?;
    let store = SqliteRecordStore::open(&config.db_path)?;

    if config.seed_on_start {
        let conn = store.connection()?;
        let today = chrono::Local::now().date_naive();
        let outcome = seed::populate_sample_data(&conn, &mut rand::thread_rng(), today)?;
        tracing::info!(
            patients = outcome.patients_created,
            "Startup seeding: {}",
            outcome.message
        );
    }

    let server = start_api_server(ApiContext::new(store), &config.cors_origins, config.bind).await?;
    tracing::info!(addr = %server.addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
    }
    tracing::info!("Shutting down");
    server.stop().await;

    Ok(())
}
