//! Request and response bodies for the chat API.

use serde::{Deserialize, Serialize};

use crate::assistant::Mode;

/// `POST /chat` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Absent in the body decodes as empty, which the handler rejects.
    #[serde(default)]
    pub message: String,
}

/// `POST /chat` success body, also used for the 500 fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub mode: Mode,
}
