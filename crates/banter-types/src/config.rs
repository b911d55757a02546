//! Configuration types for Banter.
//!
//! `BanterConfig` represents the optional `config.toml` in the data
//! directory. Every field has a default, so an empty or missing file yields
//! the stock setup: Gemini 1.5 Flash, a JSON log named `chat_history.json`,
//! and a server on `0.0.0.0:5000`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::llm::GenerationConfig;

/// Top-level configuration for the Banter service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BanterConfig {
    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl BanterConfig {
    /// Reject values the provider or server would refuse anyway.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.name.trim().is_empty() {
            return Err(ConfigError::Invalid("bot.name must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigError::Invalid(format!(
                "model.temperature must be within 0.0..=2.0, got {}",
                self.model.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.model.top_p) {
            return Err(ConfigError::Invalid(format!(
                "model.top_p must be within 0.0..=1.0, got {}",
                self.model.top_p
            )));
        }
        if self.model.max_output_tokens == 0 {
            return Err(ConfigError::Invalid(
                "model.max_output_tokens must be positive".to_string(),
            ));
        }
        if self.model.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "model.request_timeout_secs must be positive".to_string(),
            ));
        }
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::Invalid("store.path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Prompt framing: the reply marker and the optional leading context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Text placed before every prompt. Empty means no context.
    #[serde(default)]
    pub initial_context: String,
}

fn default_bot_name() -> String {
    "AI_BOT".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            initial_context: String::new(),
        }
    }
}

/// Which model to call and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default = "default_top_k")]
    pub top_k: u32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Upper bound for one generation call, enforced by the HTTP client.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Override the provider endpoint (proxies, tests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model_name() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f64 {
    GenerationConfig::default().temperature
}

fn default_top_p() -> f64 {
    GenerationConfig::default().top_p
}

fn default_top_k() -> u32 {
    GenerationConfig::default().top_k
}

fn default_max_output_tokens() -> u32 {
    GenerationConfig::default().max_output_tokens
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl ModelConfig {
    /// Sampling settings in the shape the provider expects.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
            base_url: None,
        }
    }
}

/// Backend holding the conversation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// A single JSON array rewritten on every append.
    Json,
    /// A `turns` table in a SQLite database.
    Sqlite,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Json => write!(f, "json"),
            StoreBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(StoreBackend::Json),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(format!("invalid store backend: '{other}'")),
        }
    }
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::Json
    }
}

/// Where the conversation log lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Log location; relative paths resolve against the data directory.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "chat_history.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

/// Listen address for `banter serve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
