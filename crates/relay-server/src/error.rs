//! Error types for the relay HTTP layer.
//!
//! [`RelayError`] is converted into a plain-text HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use relay_types::IdentifierError;

/// Body returned when a submitted identifier is rejected.
pub const INVALID_ID_BODY: &str = "Invalid ID";

/// Errors that can occur in the relay request handlers.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The submitted identifier matched neither accepted shape.
    #[error(transparent)]
    InvalidId(#[from] IdentifierError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidId(_) => (StatusCode::BAD_REQUEST, INVALID_ID_BODY).into_response(),
        }
    }
}
