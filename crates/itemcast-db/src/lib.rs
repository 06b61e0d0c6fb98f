//! Item persistence for the Itemcast service.
//!
//! The HTTP layer talks to storage only through the [`ItemRepository`]
//! trait, so the backing store is an injected dependency rather than a
//! global connection.
//!
//! ```text
//! HTTP handler
//!     |
//!     +-- ItemRepository
//!         |-- PgItemStore      (PostgreSQL, the production store)
//!         +-- MemoryItemStore  (volatile, for tests and local demos)
//! ```
//!
//! # Modules
//!
//! - [`repository`] -- The storage contract
//! - [`item_store`] -- `PostgreSQL` implementation
//! - [`memory_store`] -- In-process implementation
//! - [`postgres`] -- Connection pool, configuration, and migrations
//! - [`error`] -- Shared error types

pub mod error;
pub mod item_store;
pub mod memory_store;
pub mod postgres;
pub mod repository;

// Re-export primary types for convenience.
pub use error::DbError;
pub use item_store::{ItemRow, PgItemStore};
pub use memory_store::MemoryItemStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use repository::ItemRepository;
