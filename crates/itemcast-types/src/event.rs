//! Real-time mutation events.
//!
//! One [`ItemEvent`] is published after every successful create, update,
//! or delete. On the wire it is an adjacently tagged object:
//!
//! ```json
//! { "event": "item_created", "payload": { "id": 1, "name": "Widget" } }
//! ```
//!
//! The payload is always identical to the REST response body of the
//! mutation that produced it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ItemId;
use crate::item::{DeletedItem, Item};

/// A change notification pushed to every connected subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ItemEvent {
    /// A new item was inserted.
    ItemCreated(Item),
    /// An item's name was replaced.
    ItemUpdated(Item),
    /// An item was removed.
    ItemDeleted(DeletedItem),
}

impl ItemEvent {
    /// The event name as seen by clients.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ItemCreated(_) => "item_created",
            Self::ItemUpdated(_) => "item_updated",
            Self::ItemDeleted(_) => "item_deleted",
        }
    }

    /// Identifier of the item this event concerns.
    pub const fn item_id(&self) -> ItemId {
        match self {
            Self::ItemCreated(item) | Self::ItemUpdated(item) => item.id,
            Self::ItemDeleted(deleted) => deleted.id,
        }
    }
}
