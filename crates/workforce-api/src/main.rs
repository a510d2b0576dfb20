//! Workforce catalog CLI and REST API entry point.
//!
//! Binary name: `workforce`
//!
//! Resolves configuration, loads the skill/industry/check catalogs, then
//! either serves them over HTTP or runs a one-shot catalog command.

mod cli;
mod http;
mod state;

use std::path::Path;

use anyhow::Context;
use clap::Parser;

use cli::{Cli, Commands, ServeArgs};
use state::AppState;
use workforce_infra::config::{DEFAULT_CONFIG_FILE, load_config};
use workforce_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_directive(), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path, true)?,
        None => load_config(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(ServeArgs::default()));

    match &command {
        Commands::Serve(args) => args.apply(&mut config),
        Commands::Validate(args) | Commands::List(args) => args.apply(&mut config),
    }

    // All-or-nothing: a bad definition stops us here, before anything binds.
    let state = AppState::init(&config)?;

    match command {
        Commands::Serve(_) => serve(state, &config.listen_addr(), cli.quiet).await?,
        Commands::Validate(_) => cli::catalog::validate(&state, cli.json)?,
        Commands::List(_) => cli::catalog::list_skills(&state, cli.json)?,
    }

    Ok(())
}

async fn serve(state: AppState, addr: &str, quiet: bool) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    if !quiet {
        println!(
            "  {} Workforce server listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }
    tracing::info!(
        %addr,
        legacy_handlers = state.legacy_handlers,
        "Starting workforce server"
    );

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
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
}
