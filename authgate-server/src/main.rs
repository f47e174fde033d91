//! authgate server
//!
//! Entry point: configuration loading, tracing setup, and HTTP server
//! startup. Startup failures (bad config, unbindable port) exit non-zero
//! with a diagnostic; steady-state request handling never terminates the
//! process.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use authgate_server::state::AppState;

mod cli;
mod tracing_setup;

use cli::CliArgs;
use tracing_setup::install_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.help_requested {
        CliArgs::print_help();
        return Ok(());
    }

    // Resolve config path: CLI > environment variable
    let config_path = args
        .config_path
        .or_else(|| std::env::var("AUTHGATE_CONFIG_PATH").ok());

    let config =
        authgate_config::load_config(config_path.as_deref()).context("failed to load configuration")?;
    authgate_config::validate_config(&config).context("invalid configuration")?;

    install_tracing_from_config(&config.logging);

    // Touch the registry up front so a scrape that arrives before the first
    // login already sees the counters.
    authgate_metrics::init();

    let state = Arc::new(AppState::from_config(&config));
    let app = authgate_server::build_router(state);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "authgate-server starting"
    );

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;

    axum::serve(listener, app.into_make_service())
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
