//! HTTP-facing errors for the chat server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::assistant::replies::{EMPTY_MESSAGE_ERROR, UNEXPECTED_ERROR_RESPONSE};

/// Errors surfaced by route handlers.
///
/// Clients only ever see the fixed strings; details go to the log.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Missing, empty or whitespace-only message.
    #[error("No message provided")]
    EmptyMessage,

    /// Anything else that went wrong while handling a request.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::EmptyMessage => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": EMPTY_MESSAGE_ERROR })),
            )
                .into_response(),
            ServerError::Unexpected(detail) => {
                tracing::error!("Unhandled server error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "message": UNEXPECTED_ERROR_RESPONSE })),
                )
                    .into_response()
            }
        }
    }
}
