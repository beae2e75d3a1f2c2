//! Axum extractors
//!
//! [`AppJson`] behaves like [`axum::Json`] but rejects malformed bodies with an
//! [`AppError::Validation`], so clients get the usual error envelope instead of
//! a plain-text rejection.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};

use crate::core::error::AppError;

/// JSON body extractor and responder
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
