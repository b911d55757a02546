//! API key resolution.
//!
//! The Gemini key comes from the process environment, which may have been
//! populated from `.env` by [`crate::config::load_dotenv`]. It is wrapped in
//! [`SecretString`] immediately so it never reaches `Debug` output or logs.

use secrecy::SecretString;

use banter_types::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GOOGLE_GENAI_API_KEY";

/// Read the Gemini API key from [`API_KEY_ENV`].
pub fn resolve_api_key() -> Result<SecretString, ConfigError> {
    resolve_api_key_from(API_KEY_ENV)
}

/// Read an API key from `var`. Unset, empty, and non-Unicode values are all
/// treated as missing.
pub fn resolve_api_key_from(var: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => Ok(SecretString::from(val)),
        _ => Err(ConfigError::MissingApiKey(var.to_string())),
    }
}
