//! HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and serves the
//! router until the supplied shutdown future resolves, and
//! [`shutdown_signal`] which resolves on `Ctrl-C` or `SIGTERM`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use itemcast_db::ItemRepository;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::{build_router, cors_layer};
use crate::state::AppState;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Browser origins allowed by CORS. Empty or `"*"` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 4000,
            cors_origins: vec![String::from("http://localhost:5173")],
        }
    }
}

impl ServerConfig {
    /// Parse the configured host and port into a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address is malformed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))
    }
}

/// Start the HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `shutdown` resolves. In-flight requests are allowed to
/// finish before this returns.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server<R, F>(
    config: &ServerConfig,
    state: Arc<AppState<R>>,
    shutdown: F,
) -> Result<(), ServerError>
where
    R: ItemRepository,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;

    let router = build_router(state, cors_layer(&config.cors_origins));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Itemcast server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Itemcast server stopped accepting connections");
    Ok(())
}

/// Resolve when the process receives `Ctrl-C` or, on Unix, `SIGTERM`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let addr = ServerConfig::default().socket_addr();
        assert!(matches!(addr, Ok(a) if a.port() == 4000));
    }

    #[test]
    fn malformed_host_is_a_bind_error() {
        let config = ServerConfig {
            host: String::from("not a host"),
            ..ServerConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(ServerError::Bind(_))));
    }
}
