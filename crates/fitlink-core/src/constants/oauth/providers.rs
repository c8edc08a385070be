// ABOUTME: OAuth provider identifiers, authorize endpoints, and default scopes
// ABOUTME: Centralizes provider name constants to eliminate hardcoded strings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! OAuth provider constants

/// Strava fitness provider identifier
pub const STRAVA: &str = "strava";

/// Fitbit fitness provider identifier
pub const FITBIT: &str = "fitbit";

/// All providers that expose an OAuth connect endpoint
pub const ALL: &[&str] = &[STRAVA, FITBIT];

/// Strava authorization endpoint
pub const STRAVA_AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";

/// Fitbit authorization endpoint
pub const FITBIT_AUTHORIZE_URL: &str = "https://www.fitbit.com/oauth2/authorize";

/// Strava scopes (joined with commas as per Strava API requirements)
pub const STRAVA_SCOPES: &[&str] = &["read", "activity:read_all"];

/// Fitbit scopes (joined with spaces as per Fitbit API requirements)
pub const FITBIT_SCOPES: &[&str] = &["activity", "profile", "sleep", "heartrate", "weight"];

/// Strava re-prompts for consent on every connect so scope upgrades are granted
pub const STRAVA_APPROVAL_PROMPT: &str = "force";

/// Check if a provider identifier is known
#[must_use]
pub fn is_supported(provider: &str) -> bool {
    ALL.contains(&provider)
}
