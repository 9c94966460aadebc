//! API error handling.
//!
//! Validation failures are answered with `400` and the fixed plain-text
//! message. A create body whose `id` or `todo` is unusable once the
//! enumerated fields have passed is answered with `422`. Storage failures
//! are logged and answered with a bare `500`; they are never shaped into a
//! structured error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::ValidationError;
use crate::infrastructure::RepositoryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Missing or invalid field: {0}")]
    MalformedBody(&'static str),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match self {
            Self::Validation(error) => {
                tracing::debug!(field = error.field(), "Rejected request: {}", error);
                (status_code, error.to_string()).into_response()
            }
            Self::MalformedBody(field) => {
                tracing::debug!(field, "Rejected create body");
                (status_code, Self::MalformedBody(field).to_string()).into_response()
            }
            Self::Repository(error) => {
                tracing::error!(%error, "Storage failure while handling request");
                (status_code, "Internal Server Error").into_response()
            }
        }
    }
}
