//! SQLite storage layer.
//!
//! The table-backed conversation log, using WAL mode and split read/write
//! connection pools.

pub mod pool;
pub mod turn;
