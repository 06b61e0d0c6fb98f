//! Error types for the HTTP layer.
//!
//! [`ApiError`] is the request-boundary classification of every failure.
//! It converts into an Axum response whose body is always
//! `{"message": "..."}`; store internals are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itemcast_db::DbError;
use itemcast_types::ItemId;

/// Message returned for any store failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message returned when the target item does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request data. Reported as 400 with the
    /// contained message.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The operation targeted an item that does not exist.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// The store was unavailable or rejected the operation.
    #[error("store error: {0}")]
    Store(#[source] DbError),
}

impl ApiError {
    /// Classify a repository error, logging store failures with the
    /// operation that produced them.
    pub fn from_store(operation: &'static str, err: DbError) -> Self {
        match err {
            DbError::NotFound(id) => Self::NotFound(id),
            other => {
                tracing::error!(operation, error = %other, "Item store operation failed");
                Self::Store(other)
            }
        }
    }

    /// The HTTP status this error is reported as.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::InvalidInput(msg) => *msg,
            Self::NotFound(_) => NOT_FOUND_MESSAGE,
            Self::Store(_) => SERVER_ERROR_MESSAGE,
        };

        let body = serde_json::json!({ "message": message });

        (self.status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_store_error_is_not_a_server_error() {
        let err = ApiError::from_store("update", DbError::NotFound(ItemId(3)));
        assert!(matches!(err, ApiError::NotFound(ItemId(3))));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_store_errors_are_masked() {
        let err = ApiError::from_store("create", DbError::Config("bad url".to_owned()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
