//! SQLite conversation log.
//!
//! Implements `TurnStore` over the `turns` table. Each append is a single
//! INSERT, so unlike the JSON file log the write cost does not grow with
//! history length.

use sqlx::Row;
use tracing::error;

use banter_core::chat::store::TurnStore;
use banter_types::error::StoreError;
use banter_types::turn::{now_timestamp, parse_timestamp, NewTurn, Turn};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TurnStore`.
pub struct SqliteTurnStore {
    pool: DatabasePool,
}

impl SqliteTurnStore {
    /// Create a new turn store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self) -> Result<Vec<Turn>, StoreError> {
        let rows = sqlx::query("SELECT user_input, bot_response, timestamp FROM turns ORDER BY id ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.iter().map(row_to_turn).collect()
    }

    async fn insert(&self, turn: NewTurn) -> Result<Turn, StoreError> {
        let stored = Turn::stamp(turn, now_timestamp());

        sqlx::query("INSERT INTO turns (user_input, bot_response, timestamp) VALUES (?, ?, ?)")
            .bind(&stored.user_input)
            .bind(&stored.bot_response)
            .bind(stored.formatted_timestamp())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(stored)
    }
}

fn row_to_turn(row: &sqlx::sqlite::SqliteRow) -> Result<Turn, StoreError> {
    let get = |col: &str| -> Result<String, StoreError> {
        row.try_get(col)
            .map_err(|e| StoreError::Database(e.to_string()))
    };

    let timestamp = get("timestamp")?;
    Ok(Turn {
        user_input: get("user_input")?,
        bot_response: get("bot_response")?,
        timestamp: parse_timestamp(&timestamp)
            .map_err(|e| StoreError::Malformed(format!("invalid timestamp '{timestamp}': {e}")))?,
    })
}

impl TurnStore for SqliteTurnStore {
    async fn load(&self) -> Vec<Turn> {
        match self.fetch_all().await {
            Ok(turns) => turns,
            Err(e) => {
                error!(error = %e, "failed to load conversation log");
                Vec::new()
            }
        }
    }

    async fn append(&self, turn: NewTurn) -> Result<Turn, StoreError> {
        let result = self.insert(turn).await;
        if let Err(e) = &result {
            error!(error = %e, "failed to append turn");
        }
        result
    }
}
