//! LLM infrastructure.
//!
//! - [`base_llm`] - The trait every remote generation handle implements
//! - [`error`] - Provider error taxonomy
//! - [`providers`] - Concrete provider implementations

pub mod base_llm;
pub mod error;
pub mod providers;

// Re-exports for convenience
pub use base_llm::{BaseLLM, Generation, TokenUsage};
pub use error::LLMError;
pub use providers::gemini::{GeminiCompletion, GeminiConfig};
