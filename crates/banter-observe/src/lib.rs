//! Logging and trace export setup for Banter.

pub mod tracing_setup;
