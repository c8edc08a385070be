// ABOUTME: Fitness provider catalog for OAuth connect endpoints
// ABOUTME: Per-provider authorize URL, scopes, scope delimiter, and approval-prompt policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness providers
//!
//! Providers are not interchangeable in how they encode scopes: Strava expects a
//! comma-separated list, Fitbit a space-separated one. The delimiter is therefore a
//! property of the provider rather than a default of the URL builder.

use crate::constants::oauth_providers;
use crate::errors::AppError;
use crate::oauth2_client::ScopeDelimiter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fitness platform users can connect over OAuth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    /// Strava
    Strava,
    /// Fitbit
    Fitbit,
}

impl OAuthProvider {
    /// Every provider with a connect endpoint
    pub const ALL: [Self; 2] = [Self::Strava, Self::Fitbit];

    /// Lowercase identifier used in routes, config, and storage keys
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strava => oauth_providers::STRAVA,
            Self::Fitbit => oauth_providers::FITBIT,
        }
    }

    /// Human-readable provider name for messages
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Strava => "Strava",
            Self::Fitbit => "Fitbit",
        }
    }

    /// Authorization endpoint users are redirected to
    #[must_use]
    pub const fn authorize_url(self) -> &'static str {
        match self {
            Self::Strava => oauth_providers::STRAVA_AUTHORIZE_URL,
            Self::Fitbit => oauth_providers::FITBIT_AUTHORIZE_URL,
        }
    }

    /// Fixed scope list requested on connect
    #[must_use]
    pub const fn scopes(self) -> &'static [&'static str] {
        match self {
            Self::Strava => oauth_providers::STRAVA_SCOPES,
            Self::Fitbit => oauth_providers::FITBIT_SCOPES,
        }
    }

    /// Delimiter the provider expects between scopes
    #[must_use]
    pub const fn scope_delimiter(self) -> ScopeDelimiter {
        match self {
            Self::Strava => ScopeDelimiter::Comma,
            Self::Fitbit => ScopeDelimiter::Space,
        }
    }

    /// Value of the `approval_prompt` parameter, if the provider uses one
    #[must_use]
    pub const fn approval_prompt(self) -> Option<&'static str> {
        match self {
            Self::Strava => Some(oauth_providers::STRAVA_APPROVAL_PROMPT),
            Self::Fitbit => None,
        }
    }

    /// Prefix of this provider's environment variables (e.g. `STRAVA`)
    #[must_use]
    pub const fn env_prefix(self) -> &'static str {
        match self {
            Self::Strava => "STRAVA",
            Self::Fitbit => "FITBIT",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OAuthProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            oauth_providers::STRAVA => Ok(Self::Strava),
            oauth_providers::FITBIT => Ok(Self::Fitbit),
            other => Err(AppError::not_found(format!("Provider '{other}'"))),
        }
    }
}
