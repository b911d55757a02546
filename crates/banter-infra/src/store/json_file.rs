//! JSON file conversation log.
//!
//! The whole log is one JSON array of turns. Every append reads the array,
//! pushes the new turn, and rewrites the file. Writes go to a sibling
//! temporary file that is then renamed over the log, so a reader never sees
//! a half-written array.
//!
//! Appends from one process are serialized by an async mutex. Nothing guards
//! against a second process writing the same file.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use banter_core::chat::store::TurnStore;
use banter_types::error::StoreError;
use banter_types::turn::{now_timestamp, NewTurn, Turn};

/// Conversation log stored as a pretty-printed JSON array.
pub struct JsonFileTurnStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileTurnStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn io_error(&self, e: impl std::fmt::Display) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }

    /// Read and decode the log, creating it empty if it does not exist.
    async fn read_log(&self) -> Result<Vec<Turn>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.create_empty().await?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| StoreError::Malformed(format!("{}: {e}", self.path.display())))
    }

    /// Create the log holding `[]` without clobbering a concurrently created file.
    async fn create_empty(&self) -> Result<(), StoreError> {
        let path = self.path.clone();
        let created = tokio::task::spawn_blocking(move || -> std::io::Result<bool> {
            let mut tmp = NamedTempFile::new_in(parent_dir(&path))?;
            tmp.write_all(b"[]")?;
            tmp.as_file().sync_all()?;
            match tmp.persist_noclobber(&path) {
                Ok(_) => Ok(true),
                Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
                Err(e) => Err(e.error),
            }
        })
        .await
        .map_err(|e| self.io_error(e))?
        .map_err(|e| self.io_error(e))?;

        if created {
            info!(path = %self.path.display(), "created empty conversation log");
        }
        Ok(())
    }

    /// Replace the log with `turns`.
    async fn write_log(&self, turns: &[Turn]) -> Result<(), StoreError> {
        let content = to_pretty_json(turns)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(parent_dir(&path))?;
            tmp.write_all(&content)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| self.io_error(e))?
        .map_err(|e| self.io_error(e))
    }

    async fn ensure_parent(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e)),
            _ => Ok(()),
        }
    }
}

impl TurnStore for JsonFileTurnStore {
    async fn load(&self) -> Vec<Turn> {
        if let Err(e) = self.ensure_parent().await {
            error!(error = %e, "failed to prepare conversation log directory");
            return Vec::new();
        }
        match self.read_log().await {
            Ok(turns) => turns,
            Err(e) => {
                error!(error = %e, "failed to load conversation log");
                Vec::new()
            }
        }
    }

    async fn append(&self, turn: NewTurn) -> Result<Turn, StoreError> {
        let _guard = self.write_lock.lock().await;

        let result: Result<Turn, StoreError> = async {
            self.ensure_parent().await?;
            // A log that cannot be decoded is left untouched rather than
            // overwritten with a one-turn array.
            let mut turns = self.read_log().await?;
            let stored = Turn::stamp(turn, now_timestamp());
            turns.push(stored.clone());
            self.write_log(&turns).await?;
            debug!(path = %self.path.display(), turns = turns.len(), "conversation log rewritten");
            Ok::<_, StoreError>(stored)
        }
        .await;

        if let Err(e) = &result {
            error!(error = %e, "failed to append turn");
        }
        result
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Serialize with four-space indentation.
fn to_pretty_json(turns: &[Turn]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    turns
        .serialize(&mut ser)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(buf)
}
