//! Typed error handling for the biztime API
//!
//! Every handler returns [`AppResult`]. An [`AppError`] is either *classified*
//! (validation, not found, conflict), carrying the message shown to the client,
//! or *unexpected*, wrapping the [`StoreError`] that caused it.
//!
//! Each write operation has a fallback classification for unexpected failures.
//! [`ResultExt::remap_unexpected`] applies it while leaving classified errors
//! untouched:
//!
//! ```rust,ignore
//! let company = insert_company(&state, payload)
//!     .await
//!     .remap_unexpected(AppError::conflict("Code taken."))?;
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::core::store::StoreError;

/// Message rendered for every unexpected failure; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Result alias used by handlers
pub type AppResult<T> = Result<T, AppError>;

/// Discriminant of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unexpected,
}

/// The error type returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input (400)
    #[error("{0}")]
    Validation(String),

    /// No row for a direct lookup (404)
    #[error("{0}")]
    NotFound(String),

    /// Constraint violation or ambiguous write failure (409)
    #[error("{0}")]
    Conflict(String),

    /// Anything the handler did not classify itself (500)
    #[error("unexpected failure: {0}")]
    Unexpected(#[from] StoreError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Whether the error already carries a client-facing classification
    pub fn is_classified(&self) -> bool {
        self.kind() != ErrorKind::Unexpected
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    pub fn message(&self) -> String {
        match self {
            AppError::Unexpected(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            classified => classified.to_string(),
        }
    }

    /// Convert to the JSON error envelope
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                message: self.message(),
                status: self.status_code().as_u16(),
            },
        }
    }
}

/// Error envelope: `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Unexpected(source) = &self {
            tracing::error!(error = %source, "request failed with an unclassified error");
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Per-operation remapping of unexpected failures
pub trait ResultExt<T> {
    /// Replace an [`AppError::Unexpected`] with `fallback`; classified errors
    /// pass through unchanged.
    fn remap_unexpected(self, fallback: AppError) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn remap_unexpected(self, fallback: AppError) -> AppResult<T> {
        self.map_err(|err| match err {
            AppError::Unexpected(source) => {
                tracing::warn!(error = %source, remapped = %fallback, "store failure remapped");
                fallback
            }
            classified => classified,
        })
    }
}
