//! Axum router construction.
//!
//! Assembles the REST and `WebSocket` routes into a single [`Router`] with
//! CORS and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, put};
use itemcast_db::ItemRepository;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete router.
///
/// The router includes:
/// - `GET /items`, `POST /items`
/// - `PUT /items/{id}`, `DELETE /items/{id}`
/// - `GET /ws` -- `WebSocket` event stream
/// - `GET /health`
pub fn build_router<R: ItemRepository>(state: Arc<AppState<R>>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/ws", get(ws::ws_items::<R>))
        .route(
            "/items",
            get(handlers::list_items::<R>).post(handlers::create_item::<R>),
        )
        .route(
            "/items/{id}",
            put(handlers::update_item::<R>).delete(handlers::delete_item::<R>),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build a CORS layer for the given browser origins.
///
/// An empty list or an entry of `"*"` allows any origin. Entries that are
/// not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}
