// ABOUTME: OAuth configuration types for fitness provider authentication
// ABOUTME: Resolves Strava and Fitbit client ids and redirect URLs from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::providers::OAuthProvider;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// OAuth provider configuration for fitness platforms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OAuthConfig {
    /// Strava OAuth configuration
    pub strava: OAuthProviderConfig,
    /// Fitbit OAuth configuration
    pub fitbit: OAuthProviderConfig,
}

impl OAuthConfig {
    /// Load OAuth configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            strava: OAuthProviderConfig::load(OAuthProvider::Strava),
            fitbit: OAuthProviderConfig::load(OAuthProvider::Fitbit),
        }
    }

    /// Configuration for one provider
    #[must_use]
    pub const fn for_provider(&self, provider: OAuthProvider) -> &OAuthProviderConfig {
        match provider {
            OAuthProvider::Strava => &self.strava,
            OAuthProvider::Fitbit => &self.fitbit,
        }
    }

    /// Log which providers are ready to accept connect requests
    pub fn log_status(&self) {
        for provider in OAuthProvider::ALL {
            let config = self.for_provider(provider);
            if config.is_configured() {
                info!("OAuth provider {provider}: configured");
            } else {
                warn!(
                    "OAuth provider {provider}: missing {}",
                    config.missing_fields().join(", ")
                );
            }
        }
    }
}

/// OAuth provider-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OAuthProviderConfig {
    /// OAuth client ID
    pub client_id: Option<String>,
    /// OAuth redirect URL registered with the provider
    pub redirect_uri: Option<String>,
    /// Replaces the provider's standard authorization endpoint (sandboxes, proxies)
    #[serde(default)]
    pub authorize_url: Option<String>,
}

impl OAuthProviderConfig {
    /// Build a configuration from explicit values
    #[must_use]
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            redirect_uri: Some(redirect_uri.into()),
            authorize_url: None,
        }
    }

    /// Send users to `authorize_url` instead of the provider's standard endpoint
    #[must_use]
    pub fn with_authorize_url(mut self, authorize_url: impl Into<String>) -> Self {
        self.authorize_url = Some(authorize_url.into());
        self
    }

    /// Load a provider's credentials from `<PROVIDER>_CLIENT_ID` and `<PROVIDER>_REDIRECT_URL`
    ///
    /// `<PROVIDER>_REDIRECT_URI` is accepted as a fallback spelling, and
    /// `<PROVIDER>_AUTHORIZE_URL` overrides the authorization endpoint.
    #[must_use]
    pub fn load(provider: OAuthProvider) -> Self {
        let prefix = provider.env_prefix();
        Self {
            client_id: non_empty_var(&format!("{prefix}_CLIENT_ID")),
            redirect_uri: non_empty_var(&format!("{prefix}_REDIRECT_URL"))
                .or_else(|| non_empty_var(&format!("{prefix}_REDIRECT_URI"))),
            authorize_url: non_empty_var(&format!("{prefix}_AUTHORIZE_URL")),
        }
    }

    /// Client id, if present and non-empty
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Redirect URI, if present and non-empty
    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Authorization endpoint override, if present and non-empty
    #[must_use]
    pub fn authorize_url(&self) -> Option<&str> {
        self.authorize_url.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Both client id and redirect URI are resolved
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client_id().is_some() && self.redirect_uri().is_some()
    }

    /// Names of the settings that still need a value
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id().is_none() {
            missing.push("client_id");
        }
        if self.redirect_uri().is_none() {
            missing.push("redirect_uri");
        }
        missing
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
