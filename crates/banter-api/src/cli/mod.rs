//! CLI command definitions for the `banter` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod history;

#[cfg(test)]
mod test_support;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A small chatbot backed by Google Gemini.
#[derive(Parser)]
#[command(name = "banter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry.
    ///
    /// The exporter writes to stdout, so it cannot be combined with `--json`.
    #[arg(long, global = true, conflicts_with = "json")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (defaults to `server.port` in config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host address to bind to (defaults to `server.host` in config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Send one message and print the reply.
    Ask {
        /// The message to send.
        message: String,
    },

    /// Show the conversation log.
    History {
        /// List the most recent turn first.
        #[arg(long)]
        newest_first: bool,

        /// Show at most this many turns.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
