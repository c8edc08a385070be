// ABOUTME: HTTP server binary serving OAuth connect, dashboard, and health routes
// ABOUTME: Loads configuration from the environment, opens SQLite, and runs the Axum router
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Fitlink Server Binary
//!
//! Starts the Fitlink HTTP API with OAuth connect routes for Strava and Fitbit and the
//! authenticated dashboard endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use fitlink_server::{
    config::environment::ServerConfig,
    constants::endpoints,
    context::ServerResources,
    database::{DatabaseProvider, SqliteDatabase},
    logging::LoggingConfig,
    routes,
};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitlink-server")]
#[command(about = "Fitlink - fitness provider connectors and dashboard API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    LoggingConfig::from_env()
        .with_fallback_level(config.log_level)
        .init()?;

    info!("Starting Fitlink Server");
    info!("{}", config.summary());

    ensure_database_dir(&config.database_url).await?;
    let database = SqliteDatabase::connect(&config.database_url).await?;
    let database: Arc<dyn DatabaseProvider> = Arc::new(database);

    config.oauth.log_status();
    let resources = Arc::new(ServerResources::from_config(&config, database));
    let app = routes::router(resources);

    display_available_endpoints(config.http_port);

    let listener = TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.http_port))?;

    info!("Ready to serve on port {}", config.http_port);
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

/// Create the parent directory of a file-backed `SQLite` URL
async fn ensure_database_dir(database_url: &str) -> Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = path.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);
    if path.contains(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}

fn display_available_endpoints(port: u16) {
    let base = format!("http://localhost:{port}");
    info!("=== Available API Endpoints ===");
    info!("Health:     GET {base}{}", endpoints::HEALTH_CHECK);
    info!("Strava:     GET {base}/oauth/strava/connect");
    info!("Fitbit:     GET {base}/oauth/fitbit/connect");
    info!("Dashboard:  GET {base}{}", endpoints::DASHBOARD);
    info!("=== End of Endpoint List ===");
}
