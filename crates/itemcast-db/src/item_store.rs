//! `PostgreSQL`-backed item repository.
//!
//! Every mutation uses `RETURNING` so the write and its post-condition
//! check are one statement: an `UPDATE` or `DELETE` that returns no row
//! matched nothing, and is reported as [`DbError::NotFound`].

use itemcast_types::{Item, ItemId};
use sqlx::PgPool;

use crate::error::DbError;
use crate::repository::ItemRepository;

/// Operations on the `items` table.
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Create a store bound to a connection pool. Usually obtained via
    /// [`PostgresPool::item_store`](crate::PostgresPool::item_store).
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r"SELECT id, name
              FROM items
              ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(&self, name: &str) -> Result<Item, DbError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r"INSERT INTO items (name)
              VALUES ($1)
              RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(item_id = row.id, "Inserted item");
        Ok(row.into())
    }

    async fn update(&self, id: ItemId, name: &str) -> Result<Item, DbError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r"UPDATE items
              SET name = $1
              WHERE id = $2
              RETURNING id, name",
        )
        .bind(name)
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Item::from).ok_or(DbError::NotFound(id))
    }

    async fn delete(&self, id: ItemId) -> Result<ItemId, DbError> {
        let deleted = sqlx::query_scalar::<_, i64>(
            r"DELETE FROM items
              WHERE id = $1
              RETURNING id",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        deleted.map(ItemId::from).ok_or(DbError::NotFound(id))
    }
}

/// A row from the `items` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    /// Identity-generated item ID.
    pub id: i64,
    /// Trimmed, non-empty name.
    pub name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId(row.id),
            name: row.name,
        }
    }
}
