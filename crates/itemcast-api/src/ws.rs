//! `WebSocket` handler for real-time item events.
//!
//! Clients connect to `GET /ws` and receive one JSON text frame per
//! [`ItemEvent`](itemcast_types::ItemEvent), for example:
//!
//! ```json
//! {"event":"item_updated","payload":{"id":1,"name":"Gadget"}}
//! ```
//!
//! If a client falls behind, lagged events are skipped and the client
//! resumes from the most recent one. Events published while a client is
//! disconnected are never replayed.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use itemcast_db::ItemRepository;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming item events.
///
/// # Route
///
/// `GET /ws`
pub async fn ws_items<R: ItemRepository>(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState<R>>>,
) -> impl IntoResponse {
    // Subscribe before the upgrade completes so the client sees every
    // event published after its handshake.
    let rx = state.subscribe();
    debug!(
        subscribers = state.notifier.subscriber_count(),
        "WebSocket client subscribed"
    );
    ws.on_upgrade(move |socket| handle_ws(socket, rx))
}

/// Forward each broadcast event to the client until either side closes.
async fn handle_ws(
    mut socket: WebSocket,
    mut rx: tokio::sync::broadcast::Receiver<itemcast_types::ItemEvent>,
) {
    debug!("WebSocket client connected");

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        let json = match serde_json::to_string(&event) {
                            Ok(j) => j,
                            Err(e) => {
                                warn!("Failed to serialize item event: {e}");
                                continue;
                            }
                        };
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            debug!("WebSocket client disconnected (send failed)");
                            return;
                        }
                    }
                    Err(RecvError::Lagged(n)) => {
                        debug!(skipped = n, "WebSocket client lagged, skipping ahead");
                    }
                    Err(RecvError::Closed) => {
                        debug!("Broadcast channel closed, shutting down WebSocket");
                        return;
                    }
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("WebSocket client disconnected");
                        return;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            debug!("WebSocket client disconnected (pong failed)");
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        debug!("WebSocket error: {e}");
                        return;
                    }
                    _ => {
                        // Clients are listeners only.
                    }
                }
            }
        }
    }
}
