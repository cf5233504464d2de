//! Google Gemini completion provider.
//!
//! Talks to the Gemini REST API (`models/{model}:generateContent`). The
//! system instruction is fixed when the handle is built and sent with every
//! call; the user message is the only per-call content.
//!
//! # Authentication
//!
//! The API key is sent in the `x-goog-api-key` header, never in the URL, and
//! transport errors are stripped of their URL before they leave this module.
//!
//! # Failure classification
//!
//! - HTTP 429, or an error body with status `RESOURCE_EXHAUSTED`, maps to
//!   [`LLMError::RateLimited`].
//! - Any other non-success status maps to [`LLMError::Api`].
//! - A success body with no candidates is *not* an error: it comes back as a
//!   blocked [`Generation`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::llms::base_llm::{BaseLLM, Generation, TokenUsage};
use crate::llms::error::LLMError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Public Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

const PROVIDER: &str = "gemini";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Error status the API uses for exhausted quota.
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings used to build a [`GeminiCompletion`] handle.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    /// No timeout is applied when `None`.
    pub timeout: Option<Duration>,
    pub system_instruction: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
            system_instruction: system_instruction.into(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    candidate_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
    #[serde(default)]
    total_token_count: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl Candidate {
    fn text(&self) -> Option<String> {
        let parts = &self.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

impl From<UsageMetadata> for TokenUsage {
    fn from(usage: UsageMetadata) -> Self {
        Self {
            prompt_tokens: usage.prompt_token_count,
            completion_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        }
    }
}

// ---------------------------------------------------------------------------
// GeminiCompletion provider
// ---------------------------------------------------------------------------

/// Handle to a Gemini model with a frozen system instruction.
#[derive(Debug, Clone)]
pub struct GeminiCompletion {
    model: String,
    /// Marked sensitive so `Debug` output does not reveal it.
    api_key: HeaderValue,
    endpoint: reqwest::Url,
    system_instruction: String,
    client: reqwest::Client,
}

impl GeminiCompletion {
    /// Build a handle, validating the configuration and constructing the
    /// HTTP client. No network traffic happens here.
    pub fn new(config: GeminiConfig) -> Result<Self, LLMError> {
        let model = config.model.trim().to_string();
        if model.is_empty() {
            return Err(LLMError::InvalidConfig(
                "Model name is required and cannot be empty".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(LLMError::InvalidConfig("API key is empty".to_string()));
        }
        let mut api_key = HeaderValue::from_str(config.api_key.trim()).map_err(|_| {
            LLMError::InvalidConfig("API key contains invalid header characters".to_string())
        })?;
        api_key.set_sensitive(true);

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.api_base.trim_end_matches('/'),
            model
        );
        let endpoint = reqwest::Url::parse(&endpoint).map_err(|e| {
            LLMError::InvalidConfig(format!("Invalid API base '{}': {}", config.api_base, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            model,
            api_key,
            endpoint,
            system_instruction: config.system_instruction,
            client,
        })
    }

    /// Full `generateContent` URL, without the key.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn build_request_body<'a>(&'a self, message: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: message }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart {
                    text: &self.system_instruction,
                }],
            },
            generation_config: GenerationConfig { candidate_count: 1 },
        }
    }

    /// Map a non-success response onto an [`LLMError`].
    fn classify_error(status: reqwest::StatusCode, body: &str) -> LLMError {
        let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
        let message = parsed
            .as_ref()
            .map(|e| e.error.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.chars().take(500).collect());
        let exhausted = parsed
            .as_ref()
            .is_some_and(|e| e.error.status == RESOURCE_EXHAUSTED);

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS || exhausted {
            LLMError::RateLimited {
                provider: PROVIDER.to_string(),
                message,
            }
        } else {
            LLMError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message,
            }
        }
    }

    fn parse_response(body: &str) -> Result<Generation, LLMError> {
        let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
            LLMError::Decode(format!(
                "{} - Body: {}",
                e,
                body.chars().take(500).collect::<String>()
            ))
        })?;

        let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);
        let usage = response.usage_metadata.map(TokenUsage::from);

        if response.candidates.is_empty() {
            return Ok(Generation {
                usage,
                ..Generation::blocked(block_reason)
            });
        }

        let mut candidates = Vec::with_capacity(response.candidates.len());
        for (index, candidate) in response.candidates.iter().enumerate() {
            match candidate.text() {
                Some(text) => candidates.push(text),
                None if index == 0 => {
                    return Err(LLMError::MissingText {
                        finish_reason: candidate
                            .finish_reason
                            .clone()
                            .unwrap_or_else(|| "UNKNOWN".to_string()),
                    });
                }
                None => {}
            }
        }

        Ok(Generation {
            candidates,
            block_reason,
            usage,
        })
    }
}

#[async_trait]
impl BaseLLM for GeminiCompletion {
    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        PROVIDER
    }

    fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    async fn generate(&self, message: &str) -> Result<Generation, LLMError> {
        log::debug!(
            "GeminiCompletion.generate: model={}, message_len={}",
            self.model,
            message.len()
        );

        let body = self.build_request_body(message);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, self.api_key.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Transport(e.without_url()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LLMError::Transport(e.without_url()))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &text));
        }

        let generation = Self::parse_response(&text)?;
        if let Some(usage) = generation.usage {
            log::debug!("Gemini usage: {:?}", usage);
        }
        Ok(generation)
    }
}
