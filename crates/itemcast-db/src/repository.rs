//! The storage contract for items.

use core::future::Future;

use itemcast_types::{Item, ItemId};

use crate::error::DbError;

/// Create, read, update, and delete operations over the item store.
///
/// Implementations must be atomic per row and must not cache items: every
/// call goes to the store. `name` arguments are already trimmed and
/// non-empty.
///
/// `update` and `delete` detect a missing row from the result of the
/// write itself (affected rows), never from a preceding read, so a delete
/// racing an update yields [`DbError::NotFound`] for whichever lands
/// second.
pub trait ItemRepository: Send + Sync + 'static {
    /// All items, newest (highest id) first.
    fn list(&self) -> impl Future<Output = Result<Vec<Item>, DbError>> + Send;

    /// Insert a new item and return it with its assigned id.
    fn create(&self, name: &str) -> impl Future<Output = Result<Item, DbError>> + Send;

    /// Replace the name of item `id` and return the updated row.
    ///
    /// Returns [`DbError::NotFound`] if no row has that id.
    fn update(
        &self,
        id: ItemId,
        name: &str,
    ) -> impl Future<Output = Result<Item, DbError>> + Send;

    /// Remove item `id` and return its id.
    ///
    /// Returns [`DbError::NotFound`] if no row has that id.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<ItemId, DbError>> + Send;
}
