//! Error types for the Admin API.
//!
//! ## Status Mapping
//! ```text
//! ApiError::InvalidRequest  → 400 Bad Request   (bad offset, bad filter,
//!                                                unparsable payload fields)
//! ApiError::NotFound        → 404 Not Found     (update/delete hit nothing)
//! ApiError::Conflict        → 409 Conflict      (duplicate email)
//! ApiError::Database        → 500 Internal      (query/pool failures)
//! ApiError::Internal        → 500 Internal
//! ```
//!
//! The client always receives a JSON body of the form `{"error": "..."}`.
//! Database failures are logged server-side and reported generically; the
//! admin frontend has no use for SQLite error strings.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use atelier_core::ValidationError;
use atelier_db::DbError;

/// Admin API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(DbError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. } => ApiError::Conflict(err.to_string()),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Database(err) => {
                error!(%err, "Database failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal database error".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                error!(%msg, "Internal failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ValidationError::required("offset").into();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: ApiError = DbError::not_found("Order", "o1").into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_other_db_errors_stay_internal() {
        let err: ApiError = DbError::QueryFailed("boom".to_string()).into();
        assert!(matches!(err, ApiError::Database(_)));
    }
}
