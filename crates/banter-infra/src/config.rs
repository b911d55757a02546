//! Configuration loader for Banter.
//!
//! Reads `config.toml` from the data directory (`~/.banter/` in production)
//! and deserializes it into [`BanterConfig`]. Falls back to defaults when
//! the file is missing, malformed, or holds out-of-range values.

use std::path::{Path, PathBuf};

use banter_types::config::BanterConfig;
use banter_types::error::ConfigError;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`BanterConfig::default()`].
/// - If the file fails to parse or validate, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(data_dir: &Path) -> BanterConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return BanterConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return BanterConfig::default();
        }
    };

    let config = match toml::from_str::<BanterConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return BanterConfig::default();
        }
    };

    if let Err(err) = config.validate() {
        tracing::warn!("{}: {err}, using defaults", config_path.display());
        return BanterConfig::default();
    }
    config
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables already set are left alone.
///
/// Runs before logging is initialized so that `RUST_LOG` from `.env` takes
/// effect; the outcome is returned for the caller to log once it can.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    dotenv_outcome(dotenvy::dotenv())
}

/// Load a specific env file. A missing file is not an error.
pub fn load_dotenv_file(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    dotenv_outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn dotenv_outcome(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, ConfigError> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(ConfigError::Invalid(format!("failed to load .env: {err}"))),
    }
}
