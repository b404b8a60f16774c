//! API error types.
//!
//! The store itself cannot fail, so the only live failure surface is
//! request validation. Chat-facing responses must stay short single-line
//! plain text because the bot pastes the body into chat verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `count` query parameter was missing, signed, non-numeric, or
    /// too large to represent.
    #[error("Invalid count parameter. Usage: !setkills <number>")]
    InvalidCount,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidCount => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
