//! TurnStore trait definition.
//!
//! The conversation log is a single ordered sequence of turns with exactly
//! two operations: load everything, append one. Follows the same RPITIT
//! pattern as `LlmProvider`.

use banter_types::error::StoreError;
use banter_types::turn::{NewTurn, Turn};

/// Durable, append-only record of conversation turns.
///
/// Implementations live in banter-infra (`JsonFileTurnStore`,
/// `SqliteTurnStore`). Both honor the same contract:
///
/// - `load` never fails from the caller's point of view. Read or decode
///   problems are reported through tracing and yield an empty sequence.
/// - `append` stamps the turn with the current local time, places it at the
///   end of the log, and returns the stored record. Failures are reported
///   through tracing *and* returned so the caller can decide to ignore them.
pub trait TurnStore: Send + Sync {
    /// All turns, oldest first.
    fn load(&self) -> impl std::future::Future<Output = Vec<Turn>> + Send;

    /// Append one turn to the end of the log.
    fn append(
        &self,
        turn: NewTurn,
    ) -> impl std::future::Future<Output = Result<Turn, StoreError>> + Send;
}
