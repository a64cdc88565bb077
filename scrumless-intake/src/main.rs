//! scrumless-intake - Demo intake backend for Scrumless
//!
//! Records demo-scheduling form submissions in the hosted Record Store
//! and serves read-only listings of the bot-written voice tables.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use scrumless_common::RecordStore;
use scrumless_intake::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for scrumless-intake
#[derive(Parser, Debug)]
#[command(name = "scrumless-intake")]
#[command(about = "Demo intake backend for Scrumless")]
#[command(version)]
struct Args {
    /// Record Store endpoint URL
    #[arg(long, env = "SCRUMLESS_STORE_URL")]
    store_url: String,

    /// Record Store access key
    #[arg(long, env = "SCRUMLESS_STORE_KEY", hide_env_values = true)]
    store_key: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SCRUMLESS_PORT")]
    port: u16,

    /// Single origin allowed to call the API
    #[arg(
        long,
        default_value = "http://localhost:3000",
        env = "SCRUMLESS_ALLOWED_ORIGIN"
    )]
    allowed_origin: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrumless_intake=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    info!(
        "Starting Scrumless intake service v{} on port {}",
        env!("CARGO_PKG_VERSION"),
        args.port
    );
    info!("Record store: {}", args.store_url);

    let allowed_origin: HeaderValue = args
        .allowed_origin
        .parse()
        .context("Invalid allowed origin")?;

    // One store client per process, injected into all handlers
    let store = RecordStore::new(&args.store_url, &args.store_key)
        .context("Failed to create record store client")?;

    let state = AppState::new(store);
    let app = build_router(state, allowed_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
