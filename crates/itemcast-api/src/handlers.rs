//! REST API endpoint handlers.
//!
//! Each mutation handler follows the same fixed sequence: validate the
//! input, call the matching [`ItemRepository`] operation, and only after
//! the store confirms the write, announce it through the
//! [`Notifier`](crate::Notifier). Every error branch returns before the
//! announce step.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/items` | List items, newest first |
//! | `POST` | `/items` | Create an item |
//! | `PUT` | `/items/{id}` | Replace an item's name |
//! | `DELETE` | `/items/{id}` | Delete an item |
//! | `GET` | `/health` | Liveness probe |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use itemcast_db::ItemRepository;
use itemcast_types::DeletedItem;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate::{self, ItemPayload};

// ---------------------------------------------------------------------------
// GET /items
// ---------------------------------------------------------------------------

/// List all items ordered by descending id.
pub async fn list_items<R: ItemRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_store("list", e))?;

    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /items
// ---------------------------------------------------------------------------

/// Create an item from `{"name": "..."}`.
///
/// Responds `201 Created` with the stored item, whose name is trimmed.
pub async fn create_item<R: ItemRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let name = validate::item_name(payload.name.as_ref())?;

    let item = state
        .store
        .create(&name)
        .await
        .map_err(|e| ApiError::from_store("create", e))?;

    state.notifier.announce_created(&item);
    info!(item_id = item.id.into_inner(), "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

// ---------------------------------------------------------------------------
// PUT /items/{id}
// ---------------------------------------------------------------------------

/// Replace the name of an existing item.
///
/// The id is validated before the body.
pub async fn update_item<R: ItemRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(raw_id): Path<String>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::item_id(&raw_id)?;
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let name = validate::item_name(payload.name.as_ref())?;

    let item = state
        .store
        .update(id, &name)
        .await
        .map_err(|e| ApiError::from_store("update", e))?;

    state.notifier.announce_updated(&item);
    info!(item_id = item.id.into_inner(), "Item updated");

    Ok(Json(item))
}

// ---------------------------------------------------------------------------
// DELETE /items/{id}
// ---------------------------------------------------------------------------

/// Delete an item, responding with `{"id": <id>}`.
pub async fn delete_item<R: ItemRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::item_id(&raw_id)?;

    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::from_store("delete", e))?;

    state.notifier.announce_deleted(deleted);
    info!(item_id = deleted.into_inner(), "Item deleted");

    Ok(Json(DeletedItem::from(deleted)))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe. Does not touch the store.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
