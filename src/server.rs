//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, store fallback, and Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::{AppState, Store};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Opens a PostgreSQL pool with the configured limits, retrying with
/// exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once all retries are spent.
pub async fn connect_database(config: &Config, url: &str) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries);

    let pool = Retry::start(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(url)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Database connection attempt failed"))
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}

/// Chooses the backing store.
///
/// Connects to PostgreSQL and applies migrations when a database is configured,
/// otherwise falls back to the in-memory store.
///
/// # Errors
///
/// Returns an error if a configured database cannot be reached or migrated.
pub async fn open_store(config: &Config) -> Result<Store> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("No database configured; content is kept in memory and lost on restart");
        return Ok(Store::Memory);
    };

    let pool = connect_database(config, url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    Ok(Store::Postgres(Arc::new(pool)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (or in-memory store)
/// - Apply migrations
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;
    tracing::info!(store = store.name(), "Store ready");

    let state = AppState::new(store, &config)?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
