//! LlmProvider trait definition.
//!
//! This is the core abstraction that text-generation backends implement.
//! Uses RPITIT for `complete`; see `BoxLlmProvider` for dynamic dispatch.

use banter_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (Gemini, test doubles).
///
/// Implementations live in banter-infra (e.g., `GeminiProvider`). A provider
/// is expected to bound each call with its own client timeout; callers do
/// not add one.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// The model this provider sends requests to.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
