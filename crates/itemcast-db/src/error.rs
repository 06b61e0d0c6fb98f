//! Error types for the data layer.
//!
//! Every repository operation returns [`DbError`]. [`DbError::NotFound`]
//! is the only variant a caller is expected to recover from; everything
//! else means the store was unavailable or rejected the operation.

use itemcast_types::ItemId;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The write matched no row.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// A `PostgreSQL` operation failed (including pool acquire timeouts).
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store ran out of identifiers.
    #[error("item id space exhausted")]
    IdSpaceExhausted,

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Whether this error is the not-found signal rather than a store
    /// failure.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
