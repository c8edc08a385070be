// ABOUTME: Client-side sync binary that runs one throttled activity import
// ABOUTME: Persists the last-import timestamp locally and calls the import endpoint when eligible
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Fitlink Sync
//!
//! Equivalent of opening the app's home view: fires the throttled importer once for a
//! provider. Safe to run from cron at any frequency; calls inside the 12 hour cooldown
//! exit without contacting the backend.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use fitlink_server::{
    importer::{
        FileStore, HttpImportClient, ImportLifecycle, ImportOutcome, StaticSession,
        ThrottledImporter,
    },
    logging::LoggingConfig,
    providers::OAuthProvider,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fitlink-sync")]
#[command(about = "Trigger a throttled activity import for one provider")]
pub struct Args {
    /// Provider to import from (strava or fitbit)
    #[arg(long, default_value = "strava")]
    provider: String,

    /// Import endpoint URL, e.g. https://app.example.com/api/strava/import
    #[arg(long)]
    import_url: String,

    /// Session token; when absent the importer treats the user as signed out
    #[arg(long, env = "FITLINK_SESSION_TOKEN")]
    token: Option<String>,

    /// Path of the local key-value store (defaults to the user data directory)
    #[arg(long)]
    store: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()
        .with_service_name("fitlink-sync")
        .init()?;

    let provider: OAuthProvider = args
        .provider
        .parse()
        .with_context(|| format!("Unsupported provider '{}'", args.provider))?;

    let store = match args.store {
        Some(path) => FileStore::new(path),
        None => FileStore::in_data_dir(),
    };
    info!("Using import state at {}", store.path().display());

    let api = HttpImportClient::new(&args.import_url)?;
    let importer = ThrottledImporter::new(
        provider,
        Arc::new(store),
        Arc::new(StaticSession::new(args.token)),
        Arc::new(api),
    );

    let lifecycle = ImportLifecycle::new(importer);
    let Some(outcome) = lifecycle.on_view_ready(Utc::now()).await else {
        return Ok(());
    };

    match outcome {
        ImportOutcome::CoolingDown { remaining_ms } => {
            info!(
                "{provider} import ran recently; next run in {} minutes",
                remaining_ms / 60_000
            );
        }
        ImportOutcome::NoSession => info!("Not signed in, nothing to import"),
        ImportOutcome::Imported => info!("{provider} import triggered"),
        ImportOutcome::Failed { reason } => {
            info!("{provider} import did not complete ({reason}); will retry next run");
        }
    }

    Ok(())
}
