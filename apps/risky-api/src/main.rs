//! risky API server.
//!
//! Serves the risk register over HTTP until Ctrl+C or SIGTERM.

use clap::Parser;
use risky_api::{
    build_router, config::DEFAULT_CONFIG_PATH, logging::init_logging, AppConfig, AppState,
};
use std::path::PathBuf;
use tokio::{net::TcpListener, signal};
use tracing::info;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "risky-api", version, about = "Risk register HTTP service")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, env = "RISKY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("FATAL: {e}");
        std::process::exit(1);
    }

    info!(
        config = %cli.config.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting risky-api"
    );

    let app = build_router(AppState::in_memory());

    let address = config.server.address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %address, "Failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!(address = %address, "Server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Resolves once Ctrl+C or (on unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
