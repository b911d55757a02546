//! Infrastructure layer for Banter.
//!
//! Contains implementations of the traits defined in `banter-core`: the
//! JSON file and SQLite conversation logs, and the Gemini provider. Also
//! owns startup plumbing: data directory resolution, `config.toml` and
//! `.env` loading, and API key lookup.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod secret;
pub mod sqlite;
pub mod store;
