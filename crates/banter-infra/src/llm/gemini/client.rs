//! GeminiProvider -- concrete [`LlmProvider`] for Google's Gemini API.
//!
//! Sends the prompt as a single user turn to
//! `{base_url}/models/{model}:generateContent`. The API key travels in the
//! `x-goog-api-key` header so it never appears in a logged URL.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use banter_core::llm::provider::LlmProvider;
use banter_types::llm::{CompletionRequest, CompletionResponse, GenerationConfig, LlmError, Usage};

use super::types::{
    Content, ErrorEnvelope, GeminiGenerationConfig, GenerateContentRequest,
    GenerateContentResponse, Part,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini LLM provider.
///
/// Not `Debug`: the struct holds the API key.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiProvider {
    /// Create a provider for `model` with fixed sampling settings.
    pub fn new(
        api_key: SecretString,
        model: impl Into<String>,
        generation: GenerationConfig,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            generation,
        })
    }

    /// Override the base URL (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    fn to_gemini_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.generation.temperature,
                top_p: self.generation.top_p,
                top_k: self.generation.top_k,
                max_output_tokens: self.generation.max_output_tokens,
            },
        }
    }
}

/// Map a non-success status and its body to an [`LlmError`].
fn error_for_status(status: reqwest::StatusCode, retry_after: Option<u64>, body: &str) -> LlmError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| match env.error.status {
            Some(code) => format!("{code}: {}", env.error.message),
            None => env.error.message,
        })
        .unwrap_or_else(|_| body.to_string());

    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited {
            retry_after_ms: retry_after.map(|secs| secs * 1000),
        },
        400 => LlmError::InvalidRequest(message),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_gemini_request(request);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let error_body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, retry_after, &error_body));
        }

        let raw = response.text().await.map_err(|e| LlmError::Provider {
            message: format!("failed to read response body: {e}"),
        })?;

        // A 200 can still carry an error envelope.
        if let Ok(env) = serde_json::from_str::<ErrorEnvelope>(&raw) {
            return Err(LlmError::Provider {
                message: env.error.message,
            });
        }

        let gemini_resp: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let usage = gemini_resp
            .usage_metadata
            .as_ref()
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        debug!(
            model = %self.model,
            candidates = gemini_resp.candidates.len(),
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "gemini completion received"
        );

        Ok(CompletionResponse {
            text: gemini_resp.text(),
            finish_reason: gemini_resp.finish_reason(),
            model: gemini_resp
                .model_version
                .clone()
                .unwrap_or_else(|| self.model.clone()),
            usage,
        })
    }
}
