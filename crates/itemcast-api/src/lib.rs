//! HTTP API for the Itemcast real-time item service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** to list, create, update, and delete items
//! - **`WebSocket` endpoint** (`/ws`) that pushes an [`ItemEvent`] to every
//!   connected client after each successful mutation
//! - **Liveness probe** (`GET /health`)
//!
//! # Architecture
//!
//! Every mutation runs the same pipeline:
//!
//! ```text
//! request --> validate --> ItemRepository --> Notifier --> response
//!                |               |
//!               400         404 / 500 (no broadcast)
//! ```
//!
//! The store and the notifier are injected through [`AppState`], so tests
//! run the full router against an in-memory store. Broadcasts are
//! fire-and-forget over a [`tokio::sync::broadcast`] channel; clients that
//! are not connected at publish time never see the event.
//!
//! [`ItemEvent`]: itemcast_types::ItemEvent

pub mod error;
pub mod handlers;
pub mod notifier;
pub mod router;
pub mod server;
pub mod state;
pub mod validate;
pub mod ws;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use notifier::Notifier;
pub use router::{build_router, cors_layer};
pub use server::{ServerConfig, ServerError, shutdown_signal, start_server};
pub use state::AppState;
