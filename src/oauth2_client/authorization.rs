// ABOUTME: Authorization URL builder for the OAuth 2.0 authorization-code flow
// ABOUTME: Pure and deterministic; validates credentials before touching the URL
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use thiserror::Error;
use url::Url;

/// Separator placed between scopes in the `scope` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDelimiter {
    /// `a,b,c` (Strava)
    Comma,
    /// `a b c` (Fitbit and most RFC 6749 providers)
    Space,
}

impl ScopeDelimiter {
    /// The literal separator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Space => " ",
        }
    }

    /// Join scopes with this delimiter
    #[must_use]
    pub fn join(self, scopes: &[&str]) -> String {
        scopes.join(self.as_str())
    }
}

/// Reasons an authorization URL cannot be built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorizationUrlError {
    /// Client identifier is empty
    #[error("OAuth client_id is empty")]
    MissingClientId,
    /// Redirect URI is empty
    #[error("OAuth redirect_uri is empty")]
    MissingRedirectUri,
    /// Authorization endpoint could not be parsed
    #[error("Invalid authorization URL '{url}': {reason}")]
    InvalidAuthorizeUrl {
        /// The rejected URL
        url: String,
        /// Parser message
        reason: String,
    },
}

/// Inputs to an authorization redirect
#[derive(Debug, Clone)]
pub struct AuthorizationRequest<'a> {
    /// Provider authorization endpoint
    pub authorize_url: &'a str,
    /// OAuth client identifier
    pub client_id: &'a str,
    /// Callback URL registered with the provider
    pub redirect_uri: &'a str,
    /// Requested scopes, in order
    pub scopes: &'a [&'a str],
    /// How the provider wants scopes joined
    pub scope_delimiter: ScopeDelimiter,
    /// Optional `approval_prompt` value
    pub approval_prompt: Option<&'a str>,
    /// Optional opaque state round-tripped to the callback
    pub state: Option<&'a str>,
}

impl AuthorizationRequest<'_> {
    /// Build the fully qualified authorization URL
    ///
    /// Query parameters are appended in a fixed order: `response_type`, `client_id`,
    /// `redirect_uri`, `scope`, then `approval_prompt` and `state` when non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the client id or redirect URI is empty, or if the
    /// authorization endpoint is not a valid URL
    pub fn build(&self) -> Result<Url, AuthorizationUrlError> {
        if self.client_id.trim().is_empty() {
            return Err(AuthorizationUrlError::MissingClientId);
        }
        if self.redirect_uri.trim().is_empty() {
            return Err(AuthorizationUrlError::MissingRedirectUri);
        }

        let mut url = Url::parse(self.authorize_url).map_err(|e| {
            AuthorizationUrlError::InvalidAuthorizeUrl {
                url: self.authorize_url.to_owned(),
                reason: e.to_string(),
            }
        })?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", self.client_id)
                .append_pair("redirect_uri", self.redirect_uri)
                .append_pair("scope", &self.scope_delimiter.join(self.scopes));

            if let Some(prompt) = self.approval_prompt.filter(|p| !p.is_empty()) {
                query.append_pair("approval_prompt", prompt);
            }
            if let Some(state) = self.state.filter(|s| !s.is_empty()) {
                query.append_pair("state", state);
            }
        }

        Ok(url)
    }
}
