//! LLM provider implementations.
//!
//! Each provider implements the [`BaseLLM`](crate::llms::base_llm::BaseLLM)
//! trait and handles authentication, request formatting and error
//! classification for its API.
//!
//! # Available Providers
//!
//! | Provider | Module |
//! |----------|--------|
//! | Google Gemini | [`gemini`] |

pub mod gemini;
