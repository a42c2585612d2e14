//! # bankd: bank services daemon
//!
//! Composition root that wires the adapters to the bank services and starts
//! the server.
//!
//! ## Responsibilities
//! - Load configuration (`bank.toml`, env vars)
//! - Initialise `tracing` output
//! - Initialise the `SQLite` connection pool and run migrations
//! - Construct one store, mapper and CRUD service per record kind
//! - Build the axum router and serve it until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on every adapter.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use bank_adapter_http_axum::state::AppState;
use bank_adapter_storage_sqlite_sqlx::{
    SqliteAccountDetailsRepository, SqliteAtmRepository, SqliteSuspiciousCardTransferRepository,
};
use bank_app::mapping::{AccountDetailsMapper, AtmMapper, SuspiciousCardTransferMapper};
use bank_app::services::CrudService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = bank_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();
    tracing::info!(url = %config.database.url, "database ready");

    // Services
    let state = AppState::new(
        CrudService::new(
            SqliteAccountDetailsRepository::new(pool.clone()),
            AccountDetailsMapper,
        ),
        CrudService::new(
            SqliteSuspiciousCardTransferRepository::new(pool.clone()),
            SuspiciousCardTransferMapper,
        ),
        CrudService::new(SqliteAtmRepository::new(pool), AtmMapper),
    );

    // HTTP
    let app = bank_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "bankd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("bankd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
