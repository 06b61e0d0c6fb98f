//! Shared type definitions for the Itemcast real-time item service.
//!
//! These types cross every boundary in the workspace: they are rows in
//! `PostgreSQL`, bodies of REST responses, and payloads of the events
//! pushed over the `WebSocket` channel. Types flow downstream to
//! `TypeScript` via `ts-rs` for the browser client.
//!
//! # Modules
//!
//! - [`ids`] -- Store-assigned item identifier
//! - [`item`] -- The item record and its deletion receipt
//! - [`event`] -- Real-time mutation events

pub mod event;
pub mod ids;
pub mod item;

pub use event::ItemEvent;
pub use ids::ItemId;
pub use item::{DeletedItem, Item};
