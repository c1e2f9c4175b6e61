//! LLM: OpenAI-compatible adapter for the shop assistant.
//!
//! DESIGN
//! ======
//! Configured from environment variables. `LlmClient` pairs the HTTP client
//! with the model name and sampling parameters so callers only supply the
//! system prompt and conversation.

pub mod config;
pub mod openai;
pub mod types;

use config::{LlmConfig, Sampling};
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

/// Concrete LLM client for an OpenAI-compatible chat completions API.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
    sampling: Sampling,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a value is invalid, or the
    /// HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model, sampling: config.sampling })
    }

    /// Return the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner
            .chat(&self.model, self.sampling, system, messages)
            .await
    }
}
