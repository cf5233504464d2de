//! Errors raised by LLM providers.

use thiserror::Error;

/// Errors from building a provider handle or calling the remote API.
#[derive(Debug, Error)]
pub enum LLMError {
    /// The provider rejected the call for quota or rate reasons.
    #[error("Rate limited by {provider}: {message}")]
    RateLimited { provider: String, message: String },

    /// The API answered with a non-success status.
    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A candidate was returned but carried no text.
    #[error("Candidate has no text content (finish reason: {finish_reason})")]
    MissingText { finish_reason: String },

    /// The handle could not be constructed from its configuration.
    #[error("Invalid provider configuration: {0}")]
    InvalidConfig(String),
}

impl LLMError {
    /// Whether the error is a transient quota/rate condition.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
