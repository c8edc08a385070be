// ABOUTME: Timing and storage-key constants for the throttled background importer
// ABOUTME: Cooldown window, lookback window, and last-import key naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Minimum time between two import attempts that both succeed (12 hours)
pub const COOLDOWN_MS: i64 = 12 * 60 * 60 * 1000;

/// Days of history requested from the import endpoint
pub const LOOKBACK_DAYS: u32 = 30;

/// Suffix of the key-value entry holding a provider's last successful import
pub const LAST_IMPORT_KEY_SUFFIX: &str = "_last_import";

/// Storage key for a provider's last successful import timestamp
#[must_use]
pub fn last_import_key(provider: &str) -> String {
    format!("{provider}{LAST_IMPORT_KEY_SUFFIX}")
}
