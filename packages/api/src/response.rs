// ABOUTME: Shared API response types and error handling
// ABOUTME: Maps validation, not-found and storage failures to status codes and JSON bodies

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use tasklist_core::ValidationError;
use tasklist_storage::StorageError;

/// Body used for confirmations and errors alike: `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors a task handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Task not found")]
    NotFound,

    /// `message` is what the caller sees; `source` is only logged
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    /// Wrap a storage fault with the generic message reported for this operation
    pub fn storage(message: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |source| ApiError::Storage { message, source }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::Validation("Invalid task id".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage { message, source } => error!("{}: {}", message, source),
            ApiError::Validation(message) => warn!("Rejected request: {}", message),
            ApiError::NotFound => {}
        }

        let status = self.status();
        (status, ResponseJson(MessageResponse::new(self.to_string()))).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        ResponseJson(MessageResponse::new("Resource not found")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);

        let storage = ApiError::storage("Failed to get tasks")(StorageError::Database(
            "disk full".into(),
        ));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_hides_cause() {
        let err = ApiError::storage("Failed to delete task")(StorageError::Database(
            "secret path /var/db".into(),
        ));
        assert_eq!(err.to_string(), "Failed to delete task");
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: ApiError = ValidationError::MissingField("title").into();
        assert_eq!(err.to_string(), "Missing required field: title");
    }
}
