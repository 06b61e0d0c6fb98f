//! Request validation, run before any store access.
//!
//! Both checks are pure: they either return a value the repository can
//! use as-is or an [`ApiError::InvalidInput`] carrying the client-facing
//! message.

use itemcast_types::ItemId;
use serde_json::Value;
use validator::Validate;

use crate::error::ApiError;

/// Message for a missing, non-string, or blank `name`.
pub const NAME_REQUIRED: &str = "Name is required";

/// Message for an item id that is not an integer.
pub const INVALID_ID: &str = "Invalid item id";

/// Request body for `POST /items` and `PUT /items/{id}`.
///
/// `name` is kept as raw JSON so that a non-string value is reported as
/// a validation failure rather than a deserialization error.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ItemPayload {
    /// The requested item name.
    #[serde(default)]
    pub name: Option<Value>,
}

/// Whitespace stripped from both ends of a name: Unicode `White_Space`
/// plus the byte-order mark, which browsers treat as blank.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// A name that has passed validation.
#[derive(Debug, Validate)]
struct ItemName {
    #[validate(length(min = 1))]
    name: String,
}

/// Extract the trimmed, non-empty name from a request body field.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] if the field is absent, not a
/// string, or blank after trimming.
pub fn item_name(raw: Option<&Value>) -> Result<String, ApiError> {
    let Some(Value::String(text)) = raw else {
        return Err(ApiError::InvalidInput(NAME_REQUIRED));
    };

    let candidate = ItemName {
        name: text.trim_matches(is_blank).to_owned(),
    };
    candidate
        .validate()
        .map_err(|_errors| ApiError::InvalidInput(NAME_REQUIRED))?;

    Ok(candidate.name)
}

/// Parse an item id from a path segment.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] if the segment is not an integer.
pub fn item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse::<ItemId>()
        .map_err(|_parse| ApiError::InvalidInput(INVALID_ID))
}
