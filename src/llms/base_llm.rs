//! Base LLM trait for the assistant.
//!
//! Defines the seam between the response resolver and a hosted generation
//! API. A handle is built once at startup with a fixed system instruction;
//! each call carries a single user message and no history.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::llms::error::LLMError;

// ---------------------------------------------------------------------------
// Token usage
// ---------------------------------------------------------------------------

/// Token counters reported by the provider for a single call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Result of one generation call.
///
/// `candidates` may be empty: providers return no candidates when the prompt
/// is rejected by their content filters. `block_reason` carries whatever the
/// provider reported about that rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub candidates: Vec<String>,
    pub block_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl Generation {
    /// A generation with a single text candidate.
    #[cfg(test)]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![text.into()],
            ..Self::default()
        }
    }

    /// A generation the provider refused to produce.
    pub fn blocked(reason: Option<String>) -> Self {
        Self {
            candidates: Vec::new(),
            block_reason: reason,
            usage: None,
        }
    }

    /// Text of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }

    pub fn is_blocked(&self) -> bool {
        self.candidates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// BaseLLM trait
// ---------------------------------------------------------------------------

/// A configured connection to a hosted generation API.
///
/// Implementations must not retry: the resolver relies on exactly one remote
/// call per request, and classifies failures itself.
#[async_trait]
pub trait BaseLLM: Send + Sync + fmt::Debug {
    /// Model identifier.
    fn model(&self) -> &str;

    /// Provider name, e.g. `"gemini"`.
    fn provider(&self) -> &str;

    /// The system instruction frozen into this handle.
    fn system_instruction(&self) -> &str;

    /// Generate a reply to a single user message.
    async fn generate(&self, message: &str) -> Result<Generation, LLMError>;
}
