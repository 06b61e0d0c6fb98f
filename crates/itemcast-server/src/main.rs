//! Itemcast server binary.
//!
//! Wires the item store and the notifier into the HTTP API and serves it
//! until a shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (defaults, `itemcast.toml`, environment)
//! 2. Initialize structured logging (tracing)
//! 3. Open the item store (`PostgreSQL` pool + migrations, or in-memory)
//! 4. Create the notifier (broadcast channel)
//! 5. Serve REST + `WebSocket` until `Ctrl-C` / `SIGTERM`
//! 6. Close the pool

mod config;
mod logging;

use std::sync::Arc;

use anyhow::Context as _;
use itemcast_api::{AppState, Notifier, ServerConfig, shutdown_signal, start_server};
use itemcast_db::{ItemRepository, MemoryItemStore, PostgresPool};
use tracing::{info, warn};

use crate::config::{AppConfig, StorageBackend};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store setup, or the server fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    logging::init(&config.log);

    info!(
        host = %config.server.host,
        port = config.server.port,
        backend = ?config.storage.backend,
        "itemcast-server starting"
    );

    let notifier = Notifier::new(config.realtime.channel_capacity);
    let server_config = config.server.to_server_config();

    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = PostgresPool::open(&config.database.to_postgres_config())
                .await
                .context("opening the item database")?;

            let result = serve(&server_config, pool.item_store(), notifier).await;
            pool.close().await;
            result?;
        }
        StorageBackend::Memory => {
            warn!("Using in-memory item store; items are lost on exit");
            serve(&server_config, MemoryItemStore::new(), notifier).await?;
        }
    }

    info!("itemcast-server stopped");
    Ok(())
}

/// Serve the API over `store` until a shutdown signal arrives.
async fn serve<R: ItemRepository>(
    server_config: &ServerConfig,
    store: R,
    notifier: Notifier,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(store, notifier));
    start_server(server_config, state, shutdown_signal())
        .await
        .context("running HTTP server")
}
