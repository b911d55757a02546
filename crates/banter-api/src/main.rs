//! Banter CLI and REST API entry point.
//!
//! Binary name: `banter`
//!
//! Parses CLI arguments, initializes tracing and application state, then
//! dispatches to the command handler or starts the REST API server.

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use banter_api::cli::{self, Cli, Commands};
use banter_api::http;
use banter_api::state::AppState;
use banter_infra::config::load_dotenv;
use banter_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing, TracingOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Before tracing, so a RUST_LOG from .env reaches the filter.
    let dotenv = load_dotenv();

    init_tracing(&TracingOptions {
        default_filter: default_filter(cli.verbose, cli.quiet).to_string(),
        json: cli.json,
        otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match dotenv {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(err) => tracing::warn!("{err}"),
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "banter", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!(%addr, data_dir = %state.data_dir.display(), "listening");
            if !cli.quiet {
                println!(
                    "  {} Banter listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!(
                    "  {} {}",
                    console::style("Data:").dim(),
                    state.data_dir.display()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Ask { message } => {
            cli::ask::ask(&state, &message, cli.json).await?;
        }

        Commands::History {
            newest_first,
            limit,
        } => {
            cli::history::show_history(&state, newest_first, limit, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
