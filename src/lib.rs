//! # Safety Assistant
//!
//! A web chat front-end for workplace safety training guidance. Messages are
//! forwarded to a hosted Gemini model with a fixed system instruction; when
//! the model is unavailable the assistant answers from a static keyword
//! table instead.
//!
//! The process runs in one of two modes (see [`assistant::Mode`]). Startup
//! picks `Live` only when a credential is configured and the model handle
//! builds; a failed call later in the process moves it to `Demo`.

pub mod assistant;
pub mod config;
pub mod llms;
pub mod server;

pub use assistant::{Assistant, KeywordTable, Mode, Reply, ReplySource};
pub use config::Settings;
pub use llms::base_llm::BaseLLM;
pub use server::{app_router, AppState};

/// Crate version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
