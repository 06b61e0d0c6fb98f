//! Volatile in-process item repository.
//!
//! Used by the HTTP tests and by `storage.backend = "memory"` for running
//! the service without a database. It follows the same contract as the
//! `PostgreSQL` store: ids are strictly increasing and never reused, and
//! misses are detected by the write itself.

use std::collections::BTreeMap;

use itemcast_types::{Item, ItemId};
use tokio::sync::Mutex;

use crate::error::DbError;
use crate::repository::ItemRepository;

#[derive(Debug)]
struct Table {
    /// Last id handed out. Never decreases, so deleted ids are not reused.
    last_id: i64,
    rows: BTreeMap<ItemId, String>,
}

/// An [`ItemRepository`] held entirely in memory.
#[derive(Debug)]
pub struct MemoryItemStore {
    table: Mutex<Table>,
}

impl MemoryItemStore {
    /// Create an empty store. The first item gets id `1`.
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                last_id: 0,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.table.lock().await.rows.is_empty()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepository for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .rev()
            .map(|(id, name)| Item {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn create(&self, name: &str) -> Result<Item, DbError> {
        let mut table = self.table.lock().await;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or(DbError::IdSpaceExhausted)?;
        table.last_id = next;

        let id = ItemId(next);
        table.rows.insert(id, name.to_owned());
        Ok(Item {
            id,
            name: name.to_owned(),
        })
    }

    async fn update(&self, id: ItemId, name: &str) -> Result<Item, DbError> {
        let mut table = self.table.lock().await;
        let slot = table.rows.get_mut(&id).ok_or(DbError::NotFound(id))?;
        name.clone_into(slot);
        Ok(Item {
            id,
            name: name.to_owned(),
        })
    }

    async fn delete(&self, id: ItemId) -> Result<ItemId, DbError> {
        let mut table = self.table.lock().await;
        table
            .rows
            .remove(&id)
            .map(|_| id)
            .ok_or(DbError::NotFound(id))
    }
}
