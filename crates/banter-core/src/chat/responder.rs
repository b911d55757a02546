//! Prompt framing and reply normalization.
//!
//! The responder turns one user message into one displayable reply. It never
//! fails: a provider error becomes an `"Error generating response: ..."`
//! string (and an `error!` event), and a response with no text becomes a
//! fixed sentinel.

use tracing::{debug, error, warn};

use banter_types::llm::CompletionRequest;

use crate::llm::provider::LlmProvider;

/// Reply used when the provider answered without any extractable text.
pub const NO_RESPONSE_REPLY: &str = "No response from the model.";

/// Prefix of the reply used when the provider call failed.
pub const ERROR_REPLY_PREFIX: &str = "Error generating response: ";

/// Frame a user message as a turn-taking transcript.
///
/// With a non-empty `context`: `"{context}\nUser: {message}\n{bot_name}:"`.
/// Otherwise: `"User: {message}\n{bot_name}:"`. The trailing `{bot_name}:`
/// marks where the model's reply begins.
pub fn build_prompt(bot_name: &str, user_message: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.is_empty()) {
        Some(context) => format!("{context}\nUser: {user_message}\n{bot_name}:"),
        None => format!("User: {user_message}\n{bot_name}:"),
    }
}

/// Wraps an [`LlmProvider`] and always produces reply text.
pub struct Responder<P: LlmProvider> {
    provider: P,
    bot_name: String,
}

impl<P: LlmProvider> Responder<P> {
    pub fn new(provider: P, bot_name: impl Into<String>) -> Self {
        Self {
            provider,
            bot_name: bot_name.into(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate a reply for `user_message`, optionally preceded by `context`.
    pub async fn generate(&self, user_message: &str, context: Option<&str>) -> String {
        let prompt = build_prompt(&self.bot_name, user_message, context);
        debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            prompt_chars = prompt.len(),
            "requesting completion"
        );

        match self.provider.complete(&CompletionRequest::new(prompt)).await {
            Ok(response) => match response.text {
                Some(text) => {
                    debug!(
                        input_tokens = response.usage.input_tokens,
                        output_tokens = response.usage.output_tokens,
                        finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
                        "completion received"
                    );
                    text.trim().to_string()
                }
                None => {
                    warn!(
                        provider = self.provider.name(),
                        finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
                        "completion carried no text"
                    );
                    NO_RESPONSE_REPLY.to_string()
                }
            },
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "completion failed");
                format!("{ERROR_REPLY_PREFIX}{e}")
            }
        }
    }
}
