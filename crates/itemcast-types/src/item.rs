//! The item record.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ItemId;

/// A named item, the only entity in the store.
///
/// `name` is always trimmed and non-empty once persisted; the HTTP layer
/// validates it before any store operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Item {
    /// Store-assigned identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
}

/// Receipt for a deleted item: `{ "id": <number> }`.
///
/// Returned by `DELETE /items/{id}` and carried by the `item_deleted`
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DeletedItem {
    /// Identifier of the removed item.
    pub id: ItemId,
}

impl From<ItemId> for DeletedItem {
    fn from(id: ItemId) -> Self {
        Self { id }
    }
}
