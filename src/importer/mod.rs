// ABOUTME: Throttled background importer gated by a persisted last-run timestamp
// ABOUTME: Runs at most one authenticated import call per activation, once per cooldown window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Throttled Background Importer
//!
//! Each activation reads `"<provider>_last_import"` from a key-value store. If the
//! cooldown window has not elapsed the importer stops there. Otherwise it fetches the
//! session token, calls the import endpoint, and records the activation time only when
//! the endpoint answers with a success status.
//!
//! Failures never advance the timestamp, so every later activation retries until one
//! succeeds. There is no locking across concurrent activations; two clients can both
//! pass the gate before either writes, which the import endpoint tolerates.

/// Import endpoint client
pub mod client;
/// Session token sources
pub mod session;
/// Key-value stores for the last-import timestamp
pub mod store;

pub use client::{HttpImportClient, ImportApi, ImportError, ImportStatus};
pub use session::{SessionTokenSource, StaticSession};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use crate::constants::import::{last_import_key, COOLDOWN_MS, LOOKBACK_DAYS};
use crate::providers::OAuthProvider;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What an activation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Last successful import is inside the cooldown window; nothing was called
    CoolingDown {
        /// Milliseconds until the next activation becomes eligible
        remaining_ms: i64,
    },
    /// Eligible, but nobody is signed in; nothing was called
    NoSession,
    /// Import endpoint answered with success and the timestamp was advanced
    Imported,
    /// Import call failed; the timestamp was left untouched
    Failed {
        /// Status code or transport error, for logs
        reason: String,
    },
}

/// Cooldown-gated trigger for one provider's import endpoint
pub struct ThrottledImporter {
    provider: OAuthProvider,
    store: Arc<dyn KeyValueStore>,
    session: Arc<dyn SessionTokenSource>,
    api: Arc<dyn ImportApi>,
    cooldown_ms: i64,
    lookback_days: u32,
}

impl ThrottledImporter {
    /// Importer with the standard 12 hour cooldown and 30 day lookback
    #[must_use]
    pub fn new(
        provider: OAuthProvider,
        store: Arc<dyn KeyValueStore>,
        session: Arc<dyn SessionTokenSource>,
        api: Arc<dyn ImportApi>,
    ) -> Self {
        Self {
            provider,
            store,
            session,
            api,
            cooldown_ms: COOLDOWN_MS,
            lookback_days: LOOKBACK_DAYS,
        }
    }

    /// Storage key holding this provider's last successful import
    #[must_use]
    pub fn storage_key(&self) -> String {
        last_import_key(self.provider.name())
    }

    /// Last successful import in epoch milliseconds; 0 when absent or unreadable
    #[must_use]
    pub fn last_run_ms(&self) -> i64 {
        self.store
            .get(&self.storage_key())
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }

    /// Whether an activation at `now_ms` may call the import endpoint
    #[must_use]
    pub fn is_eligible(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.last_run_ms()) >= self.cooldown_ms
    }

    /// Run one activation at `now`
    pub async fn check_and_maybe_import(&self, now: DateTime<Utc>) -> ImportOutcome {
        let now_ms = now.timestamp_millis();
        let elapsed = now_ms.saturating_sub(self.last_run_ms());
        if elapsed < self.cooldown_ms {
            let remaining_ms = self.cooldown_ms.saturating_sub(elapsed);
            debug!(provider = %self.provider, remaining_ms, "Import cooling down");
            return ImportOutcome::CoolingDown { remaining_ms };
        }

        let Some(token) = self.session.session_token().await else {
            debug!(provider = %self.provider, "No session, skipping import");
            return ImportOutcome::NoSession;
        };

        let reason = match self.api.trigger_import(&token, self.lookback_days).await {
            Ok(status) if status.is_success() => {
                self.record_success(now_ms);
                return ImportOutcome::Imported;
            }
            Ok(status) => format!("import endpoint returned HTTP {}", status.code),
            Err(e) => e.to_string(),
        };

        debug!(provider = %self.provider, %reason, "Import attempt failed, will retry next activation");
        ImportOutcome::Failed { reason }
    }

    fn record_success(&self, now_ms: i64) {
        info!(provider = %self.provider, "Activity import triggered");
        if let Err(e) = self.store.set(&self.storage_key(), &now_ms.to_string()) {
            warn!(provider = %self.provider, "Failed to record import time: {e}");
        }
    }
}

/// Lifecycle hook that fires the importer once per view
///
/// The first call to [`ImportLifecycle::on_view_ready`] runs an activation; every later
/// call on the same instance is a no-op.
pub struct ImportLifecycle {
    importer: ThrottledImporter,
    fired: AtomicBool,
}

impl ImportLifecycle {
    /// Wrap an importer
    #[must_use]
    pub const fn new(importer: ThrottledImporter) -> Self {
        Self {
            importer,
            fired: AtomicBool::new(false),
        }
    }

    /// Run the importer if this is the first time the view became ready
    pub async fn on_view_ready(&self, now: DateTime<Utc>) -> Option<ImportOutcome> {
        if self.fired.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.importer.check_and_maybe_import(now).await)
    }

    /// The wrapped importer
    #[must_use]
    pub const fn importer(&self) -> &ThrottledImporter {
        &self.importer
    }
}
