//! Startup mode selection.
//!
//! Runs once: a missing credential or a handle that cannot be built puts the
//! process in demo mode. There is no retry.

use std::sync::Arc;

use thiserror::Error;

use crate::assistant::instruction::SYSTEM_INSTRUCTION;
use crate::assistant::resolver::Assistant;
use crate::config::Settings;
use crate::llms::base_llm::BaseLLM;
use crate::llms::error::LLMError;
use crate::llms::providers::gemini::{GeminiCompletion, GeminiConfig};

/// Why the live model is unavailable at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("API key not found in environment variables")]
    MissingCredential,

    #[error("Error configuring Gemini API or initializing model: {0}")]
    HandleInit(#[from] LLMError),
}

/// Build the Gemini handle described by `settings`.
pub fn initialize_model(settings: &Settings) -> Result<GeminiCompletion, StartupError> {
    let api_key = settings
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(StartupError::MissingCredential)?;
    tracing::info!("Gemini API Key loaded successfully.");

    tracing::info!("Attempting to initialize model: {}", settings.model);
    let config = GeminiConfig::new(api_key, SYSTEM_INSTRUCTION)
        .model(settings.model.as_str())
        .api_base(settings.api_base.as_str())
        .timeout(settings.request_timeout);
    let model = GeminiCompletion::new(config)?;
    tracing::info!("Successfully initialized model: {}", model.model());
    tracing::debug!("Gemini endpoint: {}", model.endpoint());
    Ok(model)
}

impl Assistant {
    /// Select the startup mode from `settings` and build the assistant.
    pub fn from_settings(settings: &Settings) -> Self {
        let assistant = match initialize_model(settings) {
            Ok(model) => {
                tracing::info!("Application starting with Gemini API - Enhanced Safety Assistant mode.");
                Assistant::live(Arc::new(model))
            }
            Err(StartupError::MissingCredential) => {
                tracing::error!("API Key not found in environment variables. Falling back to DEMO mode.");
                tracing::warn!("API Key not found. Application starting in DEMO mode.");
                Assistant::demo()
            }
            Err(e) => {
                tracing::error!("{}", e);
                tracing::warn!("Model initialization failed. Application starting in DEMO mode.");
                Assistant::demo()
            }
        };
        assistant.with_downgrade_on_failure(settings.downgrade_on_failure)
    }
}
