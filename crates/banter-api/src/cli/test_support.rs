//! Application state for CLI command tests.

use tempfile::TempDir;

use banter_core::chat::service::{ChatService, ChatSettings};
use banter_core::llm::box_provider::BoxLlmProvider;
use banter_core::llm::provider::LlmProvider;
use banter_infra::store::{JsonFileTurnStore, TurnStoreBackend};
use banter_types::config::BanterConfig;
use banter_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use crate::state::AppState;

/// Provider that always answers with the same text.
struct FixedReply(&'static str);

impl LlmProvider for FixedReply {
    fn name(&self) -> &str {
        "fixed"
    }

    fn model(&self) -> &str {
        "fixed-model"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        Ok(CompletionResponse {
            text: Some(self.0.to_string()),
            model: "fixed-model".to_string(),
            finish_reason: None,
            usage: Usage::default(),
        })
    }
}

/// State over a fresh JSON log in a temp dir; keep the dir alive for the test.
pub fn test_state(reply: &'static str) -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let store = TurnStoreBackend::Json(JsonFileTurnStore::new(dir.path().join("chat_history.json")));
    let service = ChatService::new(
        store,
        BoxLlmProvider::new(FixedReply(reply)),
        ChatSettings::default(),
    );
    let state = AppState::from_parts(service, BanterConfig::default(), dir.path().to_path_buf());
    (dir, state)
}
