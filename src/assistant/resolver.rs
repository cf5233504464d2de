//! Per-message response resolution.

use std::sync::Arc;

use serde::Serialize;

use crate::assistant::keywords::KeywordTable;
use crate::assistant::mode::{Mode, ModeFlag};
use crate::assistant::replies::{
    CONTENT_BLOCKED_RESPONSE, DEMO_GENERAL_RESPONSE, DEMO_RATE_LIMIT_RESPONSE,
    DEMO_WELCOME_MESSAGE, LIVE_WELCOME_MESSAGE,
};
use crate::llms::base_llm::BaseLLM;
use crate::llms::error::LLMError;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Text generated by the remote model.
    Live,
    /// Remote call was rate limited.
    RateLimited,
    /// Remote model returned no candidates.
    ContentBlocked,
    /// Remote call failed for any other reason.
    CallFailed,
    /// Demo keyword match.
    Keyword,
    /// Demo fallback with no keyword match.
    General,
}

/// A resolved reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub source: ReplySource,
}

impl Reply {
    fn new(message: impl Into<String>, source: ReplySource) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }
}

/// Application-level assistant: the optional live handle, the mode flag and
/// the demo keyword table.
///
/// Mode is `Live` only while a handle exists and no downgrade has happened.
#[derive(Debug)]
pub struct Assistant {
    llm: Option<Arc<dyn BaseLLM>>,
    mode: ModeFlag,
    keywords: KeywordTable,
    downgrade_on_failure: bool,
}

impl Assistant {
    /// Assistant backed by a live model handle.
    pub fn live(llm: Arc<dyn BaseLLM>) -> Self {
        Self {
            llm: Some(llm),
            mode: ModeFlag::new(Mode::Live),
            keywords: KeywordTable::default(),
            downgrade_on_failure: true,
        }
    }

    /// Assistant that only answers from the keyword table.
    pub fn demo() -> Self {
        Self {
            llm: None,
            mode: ModeFlag::new(Mode::Demo),
            keywords: KeywordTable::default(),
            downgrade_on_failure: true,
        }
    }

    /// Whether a generic call failure switches the process to demo mode.
    pub fn with_downgrade_on_failure(mut self, downgrade: bool) -> Self {
        self.downgrade_on_failure = downgrade;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Landing-page greeting for the current mode.
    pub fn greeting(&self) -> &'static str {
        match self.mode() {
            Mode::Live => LIVE_WELCOME_MESSAGE,
            Mode::Demo => DEMO_WELCOME_MESSAGE,
        }
    }

    fn live_handle(&self) -> Option<&Arc<dyn BaseLLM>> {
        match self.mode() {
            Mode::Live => self.llm.as_ref(),
            Mode::Demo => None,
        }
    }

    /// Resolve a reply for a trimmed, non-empty message.
    pub async fn resolve(&self, message: &str) -> Reply {
        if let Some(llm) = self.live_handle() {
            tracing::debug!(provider = llm.provider(), model = llm.model(), "Sending message to API");
            return match llm.generate(message).await {
                Ok(generation) if generation.is_blocked() => {
                    tracing::warn!(
                        block_reason = generation.block_reason.as_deref().unwrap_or("unspecified"),
                        "API response potentially blocked"
                    );
                    Reply::new(CONTENT_BLOCKED_RESPONSE, ReplySource::ContentBlocked)
                }
                Ok(generation) => {
                    if let Some(usage) = &generation.usage {
                        tracing::debug!(
                            prompt_tokens = usage.prompt_tokens,
                            completion_tokens = usage.completion_tokens,
                            "Received API response"
                        );
                    }
                    Reply::new(generation.first_text().unwrap_or_default(), ReplySource::Live)
                }
                Err(e) => self.handle_call_error(e),
            };
        }

        self.demo_reply(message)
    }

    fn handle_call_error(&self, error: LLMError) -> Reply {
        if error.is_rate_limit() {
            tracing::error!("RATE LIMIT ERROR: {}", error);
            return Reply::new(DEMO_RATE_LIMIT_RESPONSE, ReplySource::RateLimited);
        }

        tracing::error!("Error during API call: {}", error);
        if self.downgrade_on_failure && self.mode.downgrade() {
            tracing::warn!("Switching to DEMO mode for the rest of the process");
        }
        Reply::new(DEMO_GENERAL_RESPONSE, ReplySource::CallFailed)
    }

    /// Keyword-table answer, or the general demo reply.
    pub fn demo_reply(&self, message: &str) -> Reply {
        match self.keywords.lookup(message) {
            Some(reply) => Reply::new(reply, ReplySource::Keyword),
            None => Reply::new(DEMO_GENERAL_RESPONSE, ReplySource::General),
        }
    }
}
