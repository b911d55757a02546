//! Conversation log backends.
//!
//! [`TurnStoreBackend`] picks between the JSON file log and the SQLite log
//! from configuration and forwards the `TurnStore` calls.

pub mod json_file;

use std::path::{Path, PathBuf};

use tracing::info;

use banter_core::chat::store::TurnStore;
use banter_types::config::{StoreBackend, StoreConfig};
use banter_types::error::StoreError;
use banter_types::turn::{NewTurn, Turn};

use crate::sqlite::pool::DatabasePool;
use crate::sqlite::turn::SqliteTurnStore;

pub use json_file::JsonFileTurnStore;

/// The configured conversation log.
pub enum TurnStoreBackend {
    Json(JsonFileTurnStore),
    Sqlite(SqliteTurnStore),
}

impl TurnStoreBackend {
    pub fn kind(&self) -> StoreBackend {
        match self {
            TurnStoreBackend::Json(_) => StoreBackend::Json,
            TurnStoreBackend::Sqlite(_) => StoreBackend::Sqlite,
        }
    }
}

impl TurnStore for TurnStoreBackend {
    async fn load(&self) -> Vec<Turn> {
        match self {
            TurnStoreBackend::Json(store) => store.load().await,
            TurnStoreBackend::Sqlite(store) => store.load().await,
        }
    }

    async fn append(&self, turn: NewTurn) -> Result<Turn, StoreError> {
        match self {
            TurnStoreBackend::Json(store) => store.append(turn).await,
            TurnStoreBackend::Sqlite(store) => store.append(turn).await,
        }
    }
}

/// Resolve `config.path` against `data_dir` unless it is already absolute.
pub fn resolve_store_path(config: &StoreConfig, data_dir: &Path) -> PathBuf {
    let path = Path::new(&config.path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}

/// Open the conversation log described by `config`.
///
/// The JSON log is opened lazily (the file is created on first access). The
/// SQLite log connects and migrates immediately, so a bad path fails here.
pub async fn open_store(config: &StoreConfig, data_dir: &Path) -> Result<TurnStoreBackend, StoreError> {
    let path = resolve_store_path(config, data_dir);
    info!(backend = %config.backend, path = %path.display(), "opening conversation log");

    match config.backend {
        StoreBackend::Json => Ok(TurnStoreBackend::Json(JsonFileTurnStore::new(path))),
        StoreBackend::Sqlite => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Io {
                        path: parent.display().to_string(),
                        message: e.to_string(),
                    })?;
            }
            let pool = DatabasePool::open(&path)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;
            Ok(TurnStoreBackend::Sqlite(SqliteTurnStore::new(pool)))
        }
    }
}
