//! # API Errors
//!
//! Error taxonomy for the HTTP surface and its translation to status codes
//! and JSON bodies. Nothing below this boundary is allowed to crash a
//! request: store failures are caught here and re-labeled or surfaced as a
//! generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed, missing, or out-of-range input, detected before any
    /// mutation
    #[error("ValidationError: {0}")]
    Validation(String),

    /// Uniqueness violation detected by a pre-check
    #[error("ConflictError: {0}")]
    Conflict(String),

    /// Operation targeted a nonexistent identity
    #[error("NotFoundError: {0}")]
    NotFound(String),

    /// Persistence failure; duplicate-key rejections are re-labeled as
    /// conflicts, everything else is unexpected
    #[error("StoreError: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Conflict naming the offending field value, in the same phrasing used
    /// for store-surfaced duplicates.
    pub fn duplicate(field: &str, value: &str) -> Self {
        ApiError::Conflict(format!("{} '{}' already exists", field, value))
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            // Store-level uniqueness rejection is a conflict, not a server
            // fault; anything else from the store is.
            ApiError::Store(StoreError::DuplicateKey { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for the response body.
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) | ApiError::NotFound(msg) => {
                msg.clone()
            }
            ApiError::Store(StoreError::DuplicateKey { field, value }) => {
                format!("{} '{}' already exists", field, value)
            }
            ApiError::Store(_) => "Internal server error".to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            message: err.message(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("taken".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("gone".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::LockPoisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_duplicate_relabeled_as_conflict() {
        let err = ApiError::from(StoreError::duplicate_key("imageName", "hero"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "imageName 'hero' already exists");
    }

    #[test]
    fn test_precheck_and_store_conflicts_agree() {
        let pre = ApiError::duplicate("imageName", "hero");
        let store = ApiError::from(StoreError::duplicate_key("imageName", "hero"));
        assert_eq!(pre.message(), store.message());
        assert_eq!(pre.status_code(), store.status_code());
    }

    #[test]
    fn test_unexpected_store_error_hides_detail() {
        let err = ApiError::from(StoreError::LockPoisoned);
        assert_eq!(err.message(), "Internal server error");
        // The diagnostic string still carries the cause.
        assert!(err.to_string().contains("lock poisoned"));
    }
}
