//! Shared domain types for Banter.
//!
//! This crate contains the core domain types used across the Banter service:
//! conversation turns, LLM request/response shapes, configuration, and the
//! error types shared by the store, responder, and HTTP layers.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod turn;
