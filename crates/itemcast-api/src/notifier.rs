//! Fan-out of item mutation events to connected clients.
//!
//! The [`Notifier`] wraps a [`broadcast`] channel. Each `WebSocket`
//! connection holds a receiver; each successful mutation sends one
//! [`ItemEvent`]. Delivery is best effort: nothing is queued for clients
//! that are not connected, and a send with no receivers is a no-op.

use itemcast_types::{DeletedItem, Item, ItemEvent, ItemId};
use tokio::sync::broadcast;
use tracing::debug;

/// Default capacity of the broadcast channel.
///
/// If a subscriber falls behind by more than this many events it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest event.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Publishes [`ItemEvent`]s to every current subscriber.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<ItemEvent>,
}

impl Notifier {
    /// Create a notifier whose channel buffers up to `capacity` events per
    /// subscriber. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Subscribe to all events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ItemEvent> {
        self.tx.subscribe()
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Announce a newly created item.
    pub fn announce_created(&self, item: &Item) -> usize {
        self.publish(ItemEvent::ItemCreated(item.clone()))
    }

    /// Announce an item whose name was replaced.
    pub fn announce_updated(&self, item: &Item) -> usize {
        self.publish(ItemEvent::ItemUpdated(item.clone()))
    }

    /// Announce a removed item.
    pub fn announce_deleted(&self, id: ItemId) -> usize {
        self.publish(ItemEvent::ItemDeleted(DeletedItem::from(id)))
    }

    /// Send an event, returning how many subscribers it reached.
    fn publish(&self, event: ItemEvent) -> usize {
        let name = event.name();
        let item_id = event.item_id().into_inner();
        // send returns Err only when there are zero receivers,
        // which is normal when no WebSocket clients are connected.
        let subscribers = self.tx.send(event).unwrap_or(0);
        debug!(event = name, item_id, subscribers, "Broadcast item event");
        subscribers
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}
