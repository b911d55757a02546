//! Chat service composing the responder and the conversation log.
//!
//! `submit` validates the message, obtains a reply, and records the turn;
//! `history` returns the log. Upstream and persistence failures never reach
//! the caller: the former become reply text, the latter are logged and
//! skipped.

use tracing::{info, warn};

use banter_types::config::BotConfig;
use banter_types::error::ValidationError;
use banter_types::turn::{NewTurn, Turn};

use crate::chat::responder::Responder;
use crate::chat::store::TurnStore;
use crate::llm::provider::LlmProvider;

/// Per-process chat settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// Name that marks the start of the bot's reply in the prompt.
    pub bot_name: String,
    /// Static text placed before every prompt.
    pub initial_context: Option<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from(&BotConfig::default())
    }
}

impl From<&BotConfig> for ChatSettings {
    fn from(config: &BotConfig) -> Self {
        let context = config.initial_context.trim();
        Self {
            bot_name: config.name.clone(),
            initial_context: (!context.is_empty()).then(|| config.initial_context.clone()),
        }
    }
}

/// Orchestrates reply generation and turn persistence.
///
/// Generic over `TurnStore` and `LlmProvider`; the concrete types live in
/// banter-infra.
pub struct ChatService<S: TurnStore, P: LlmProvider> {
    store: S,
    responder: Responder<P>,
    settings: ChatSettings,
}

impl<S: TurnStore, P: LlmProvider> ChatService<S, P> {
    /// Create a new chat service over the given store and provider.
    pub fn new(store: S, provider: P, settings: ChatSettings) -> Self {
        let responder = Responder::new(provider, settings.bot_name.clone());
        Self {
            store,
            responder,
            settings,
        }
    }

    /// Access the responder.
    pub fn responder(&self) -> &Responder<P> {
        &self.responder
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Answer one message and record the exchange.
    ///
    /// Fails only when `message` is absent or empty; in that case nothing is
    /// generated or appended. Otherwise the reply is always returned, even if
    /// the provider failed or the turn could not be persisted.
    pub async fn submit(&self, message: Option<&str>) -> Result<String, ValidationError> {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => {
                info!("rejecting chat request without a message");
                return Err(ValidationError::NoMessage);
            }
        };

        let reply = self
            .responder
            .generate(message, self.settings.initial_context.as_deref())
            .await;

        let turn = NewTurn::new(message, reply.as_str())?;
        match self.store.append(turn).await {
            Ok(stored) => {
                info!(timestamp = %stored.formatted_timestamp(), "turn recorded");
            }
            Err(e) => {
                warn!(error = %e, "turn not persisted; replying anyway");
            }
        }

        Ok(reply)
    }

    /// The full conversation log, oldest first.
    pub async fn history(&self) -> Vec<Turn> {
        self.store.load().await
    }
}
