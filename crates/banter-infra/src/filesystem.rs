//! Data directory layout.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "BANTER_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `BANTER_DATA_DIR` environment variable
/// 2. `~/.banter`
/// 3. `.banter` in the working directory
pub fn resolve_data_dir() -> PathBuf {
    resolve_data_dir_from(DATA_DIR_ENV)
}

fn resolve_data_dir_from(var: &str) -> PathBuf {
    if let Ok(dir) = std::env::var(var) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".banter");
    }

    PathBuf::from(".banter")
}
