//! Application state wiring the chat service together.
//!
//! AppState holds the concrete service instance used by both the CLI and
//! the REST API. `ChatService` is generic over its store and provider;
//! AppState pins it to the configured backend and the boxed provider.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use banter_core::chat::service::{ChatService, ChatSettings};
use banter_core::llm::box_provider::BoxLlmProvider;
use banter_infra::config::load_config;
use banter_infra::filesystem::resolve_data_dir;
use banter_infra::llm::create_provider;
use banter_infra::secret::resolve_api_key;
use banter_infra::store::{open_store, TurnStoreBackend};
use banter_types::config::BanterConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<TurnStoreBackend, BoxLlmProvider>;

/// Shared application state.
///
/// Built once at startup and shared read-only; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<BanterConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load configuration, open the
    /// conversation log, and build the Gemini provider.
    ///
    /// Expects `.env` to have been loaded already.
    ///
    /// Fails if the API key is missing or the log cannot be opened.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let config = load_config(&data_dir).await;
        let api_key = resolve_api_key()?;

        let store = open_store(&config.store, &data_dir)
            .await
            .context("failed to open conversation log")?;
        let provider = create_provider(&config.model, api_key)?;

        info!(
            data_dir = %data_dir.display(),
            store = %store.kind(),
            model = %config.model.name,
            "application state initialized"
        );

        let service = ChatService::new(store, provider, ChatSettings::from(&config.bot));
        Ok(Self::from_parts(service, config, data_dir))
    }

    /// Assemble state from an already-built service.
    pub fn from_parts(chat_service: ConcreteChatService, config: BanterConfig, data_dir: PathBuf) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
            data_dir,
        }
    }
}
