//! Assistant service: system prompt assembly and the single-turn reply.
//!
//! DESIGN
//! ======
//! Every `/chat` request is answered independently. The model sees the
//! system prompt (base prompt plus catalog snapshot) and the one user
//! message; earlier exchanges are stored for history but never replayed.

use std::path::Path;

use tracing::{info, warn};

use super::catalog::{Product, catalog_text};
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

/// Used when the prompt file is missing or empty.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a friendly consultant of an electronics shop. \
Answer questions about the products listed below, their prices, availability and warranty. \
If a product is not in the list, say that it is not available. Keep answers short.";

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("message is empty")]
    EmptyMessage,
    #[error("LLM returned an empty reply")]
    EmptyReply,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Combine the base prompt with the catalog, one product per line.
#[must_use]
pub fn build_system_prompt(base: &str, products: &[Product]) -> String {
    let base = base.trim_end();
    if products.is_empty() {
        return base.to_owned();
    }
    format!("{base}\n{}", catalog_text(products))
}

/// Read the base prompt from `path`, falling back to [`DEFAULT_SYSTEM_PROMPT`].
pub async fn load_prompt(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(text) if !text.trim().is_empty() => {
            info!(path = %path.display(), "system prompt loaded");
            text
        }
        Ok(_) => {
            warn!(path = %path.display(), "system prompt file is empty; using built-in prompt");
            DEFAULT_SYSTEM_PROMPT.to_owned()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "system prompt file unreadable; using built-in prompt");
            DEFAULT_SYSTEM_PROMPT.to_owned()
        }
    }
}

/// Ask the LLM to answer `message`.
///
/// # Errors
///
/// Returns an error when no LLM is configured, the message is blank, the
/// provider call fails, or the reply carries no text.
pub async fn reply(llm: Option<&dyn LlmChat>, system_prompt: &str, message: &str) -> Result<String, AssistantError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AssistantError::EmptyMessage);
    }
    let llm = llm.ok_or(AssistantError::LlmNotConfigured)?;

    let response = llm.chat(system_prompt, &[Message::user(message)]).await?;
    info!(
        model = %response.model,
        finish_reason = %response.finish_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "assistant reply"
    );

    let text = response.text.trim();
    if text.is_empty() {
        return Err(AssistantError::EmptyReply);
    }
    Ok(text.to_owned())
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
