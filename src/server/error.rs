//! Error responses for HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::library::LibraryError;

/// Failure payload: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human readable message.
    pub error: String,
}

/// Handler error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A library operation failed.
    #[error(transparent)]
    Library(#[from] LibraryError),
    /// Unexpected failure outside the library (e.g. a blocking task panicked).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Library(
                LibraryError::DirectoryNotFound(_)
                | LibraryError::MissingName
                | LibraryError::DuplicateName(_)
                | LibraryError::ReservedName(_)
                | LibraryError::InvalidPath(_),
            ) => StatusCode::BAD_REQUEST,
            Self::Library(LibraryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Library(LibraryError::Io(_)) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let payload = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (status, axum::Json(payload)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
