//! LLM: hosted completion adapter for the chat gateway.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. `LlmClient` wraps an
//! OpenAI-compatible chat completions client and pins the model name so
//! callers only supply sampling parameters and messages.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message, SamplingParams};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client built from a typed [`LlmConfig`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(config.api_key.clone(), config.base_url.clone(), config.timeouts)?;
        Ok(Self { inner, model: config.model.clone() })
    }

    /// Return the configured model name (e.g. `"llama-3.3-70b-versatile"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, params: &SamplingParams, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner.chat(&self.model, params, messages).await
    }
}
