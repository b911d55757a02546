//! Conversation handling for Banter.
//!
//! - `store`: the `TurnStore` port for the conversation log
//! - `responder`: prompt framing and reply normalization around a provider
//! - `service`: the externally visible `submit` / `history` operations

pub mod responder;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;
