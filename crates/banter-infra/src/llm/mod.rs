//! LLM provider implementations.
//!
//! Contains the Gemini implementation of the [`LlmProvider`] trait defined
//! in `banter-core`, and [`create_provider`], which builds it from the
//! `[model]` configuration section.
//!
//! [`LlmProvider`]: banter_core::llm::provider::LlmProvider

pub mod gemini;

use std::time::Duration;

use secrecy::SecretString;
use tracing::info;

use banter_core::llm::box_provider::BoxLlmProvider;
use banter_types::config::ModelConfig;
use banter_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Create a [`BoxLlmProvider`] from the model configuration.
///
/// The client is built once here and reused for every request.
pub fn create_provider(config: &ModelConfig, api_key: SecretString) -> Result<BoxLlmProvider, LlmError> {
    let mut provider = GeminiProvider::new(
        api_key,
        config.name.clone(),
        config.generation(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    info!(model = %config.name, "gemini provider ready");
    Ok(BoxLlmProvider::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_core::llm::provider::LlmProvider;

    #[test]
    fn test_create_provider_uses_configured_model() {
        let config = ModelConfig {
            name: "gemini-1.5-pro".to_string(),
            ..ModelConfig::default()
        };
        let provider = create_provider(&config, SecretString::from("k")).unwrap();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-1.5-pro");
    }
}
