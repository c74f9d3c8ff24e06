//! Fallback error responses for the web surface.
//!
//! Validation and service failures render the error template with an
//! appropriate status; this type covers what remains — requests that never
//! reach an action and rendering failures themselves.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors answered without a rendered page.
#[derive(Debug, Error)]
pub enum WebError {
    /// The `action` parameter is missing or names no known action.
    #[error("unknown action: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnknownAction(Option<String>),

    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
            Self::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
