//! Shared application state for the HTTP server.

use itemcast_db::ItemRepository;
use tokio::sync::broadcast;

use itemcast_types::ItemEvent;

use crate::notifier::Notifier;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Holds the two collaborators of the mutation pipeline: the
/// item store and the notifier. Neither is a global, so tests substitute
/// an in-memory store and subscribe to the notifier directly.
#[derive(Debug)]
pub struct AppState<R> {
    /// The item store.
    pub store: R,
    /// Broadcaster for mutation events.
    pub notifier: Notifier,
}

impl<R: ItemRepository> AppState<R> {
    /// Create application state from a store and a notifier.
    pub const fn new(store: R, notifier: Notifier) -> Self {
        Self { store, notifier }
    }

    /// Subscribe to mutation events.
    pub fn subscribe(&self) -> broadcast::Receiver<ItemEvent> {
        self.notifier.subscribe()
    }
}
