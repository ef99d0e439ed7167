//! Hospicare HTTP service entry point.
//!
//! Binary name: `hospicare`
//!
//! Parses CLI arguments, opens the store, wires the services, then starts
//! the HTTP server.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hospicare_api::http::router::build_router;
use hospicare_api::state::AppState;
use hospicare_infra::config::load_service_config;

#[derive(Parser)]
#[command(name = "hospicare", about = "Hospice patient-care HTTP service", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Interface to bind (overrides config.toml)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,hospicare=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Initialize application state (store, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let config = load_service_config(&state.data_dir).await;
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Hospicare API listening on http://{addr}");

            let router = build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }
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
}
