//! Chat service logic and port traits for Banter.
//!
//! This crate defines the "ports" (the `TurnStore` and `LlmProvider` traits)
//! that the infrastructure layer implements, plus the `Responder` and
//! `ChatService` built on top of them. It depends only on `banter-types` --
//! never on `banter-infra` or any database/HTTP crate.

pub mod chat;
pub mod llm;
