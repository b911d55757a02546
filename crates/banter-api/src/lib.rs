//! CLI and REST API application layer for Banter.
//!
//! The `banter` binary in `main.rs` is a thin dispatcher over these modules;
//! the router is exposed here so it can be driven in-process by tests.

pub mod cli;
pub mod http;
pub mod state;
