// ABOUTME: OAuth initiation routes redirecting users to a provider's consent screen
// ABOUTME: Validates provider configuration and converts every failure into a JSON 500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! OAuth connect routes
//!
//! `GET /oauth/{provider}/connect?state=<opaque>` answers with `302 Found` to the
//! provider's authorization URL. When the provider's client id or redirect URL is not
//! configured, or the URL cannot be built, it answers `500` with a JSON body carrying
//! a `message`. Only the first `state` value is used when the parameter repeats.

use crate::context::ServerResources;
use crate::errors::AppError;
use crate::oauth2_client::AuthorizationRequest;
use crate::providers::OAuthProvider;
use axum::{
    extract::{rejection::PathRejection, Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};
use url::form_urlencoded;

/// First `state` value in a raw query string
#[must_use]
pub fn state_param(raw_query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(raw_query?.as_bytes())
        .find(|(key, _)| key == "state")
        .map(|(_, value)| value.into_owned())
}

/// OAuth connect routes
pub struct OAuthRoutes;

impl OAuthRoutes {
    /// Create the connect routes for every provider
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/oauth/:provider/connect", get(Self::handle_connect))
            .with_state(resources)
    }

    async fn handle_connect(
        State(resources): State<Arc<ServerResources>>,
        provider: Result<Path<String>, PathRejection>,
        RawQuery(raw_query): RawQuery,
    ) -> Response {
        let provider = match provider {
            Ok(Path(provider)) => provider,
            Err(rejection) => {
                return AppError::invalid_input(rejection.body_text()).into_response();
            }
        };
        let provider = match provider.parse::<OAuthProvider>() {
            Ok(provider) => provider,
            Err(e) => return e.into_response(),
        };

        let state = state_param(raw_query.as_deref());
        match Self::authorization_redirect(&resources, provider, state.as_deref()) {
            Ok(location) => {
                info!(%provider, "Redirecting to provider authorization");
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Err(e) => {
                error!(%provider, "OAuth connect failed: {e}");
                e.into_response()
            }
        }
    }

    /// Resolve the authorization URL for a provider, or the error to return
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the client id or redirect URL is missing,
    /// or an internal error when the URL cannot be built
    pub fn authorization_redirect(
        resources: &ServerResources,
        provider: OAuthProvider,
        state: Option<&str>,
    ) -> Result<String, AppError> {
        let config = resources.oauth.for_provider(provider);
        let (Some(client_id), Some(redirect_uri)) = (config.client_id(), config.redirect_uri())
        else {
            return Err(AppError::config_missing(format!(
                "{} OAuth is not configured: missing {}",
                provider.display_name(),
                config.missing_fields().join(" and ")
            )));
        };

        let request = AuthorizationRequest {
            authorize_url: config.authorize_url().unwrap_or(provider.authorize_url()),
            client_id,
            redirect_uri,
            scopes: provider.scopes(),
            scope_delimiter: provider.scope_delimiter(),
            approval_prompt: provider.approval_prompt(),
            state,
        };

        request.build().map(String::from).map_err(|e| {
            AppError::internal(format!(
                "Failed to build {} authorization URL",
                provider.display_name()
            ))
            .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_param_takes_first_value() {
        assert_eq!(state_param(Some("state=a&state=b")).as_deref(), Some("a"));
        assert_eq!(state_param(Some("x=1&state=a%20b")).as_deref(), Some("a b"));
        assert_eq!(state_param(Some("state=")).as_deref(), Some(""));
        assert_eq!(state_param(Some("other=1")), None);
        assert_eq!(state_param(None), None);
    }
}
