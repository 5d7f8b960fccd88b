//! stagebook-web - booking directory for venues, artists and shows
//!
//! Serves the server-rendered site over HTTP on top of a local SQLite
//! database. The database is created on first run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stagebook_common::config::{Overrides, Settings};
use stagebook_common::db::init_database;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stagebook_web::{build_router, AppState};

const DEFAULT_LOG_FILTER: &str = "stagebook_web=debug,tower_http=debug";

/// Command-line arguments for stagebook-web
#[derive(Parser, Debug)]
#[command(name = "stagebook-web")]
#[command(about = "Booking directory for venues, artists and shows")]
#[command(version)]
struct Args {
    /// TOML config file (default: $STAGEBOOK_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, env = "STAGEBOOK_DATABASE")]
    database: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(short, long, env = "STAGEBOOK_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolved before tracing starts so the config file can set the log level
    let settings = Settings::resolve(Overrides {
        config_file: args.config,
        database_path: args.database,
        bind_address: args.bind,
    })
    .context("Failed to load configuration")?;

    let default_filter = settings
        .log_filter
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Stagebook (stagebook-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database path: {}", settings.database_path.display());

    let pool = init_database(&settings.database_path)
        .await
        .context("Failed to initialize database")?;
    info!("✓ Database ready");

    let app = build_router(AppState::new(pool.clone()));

    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_address))?;
    info!("stagebook-web listening on http://{}", settings.bind_address);
    info!("Health check: http://{}/health", settings.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
