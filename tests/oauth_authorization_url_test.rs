// ABOUTME: Tests for OAuth authorization URL construction
// ABOUTME: Covers state round-tripping, parameter presence, and per-provider scope formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitlink_server::oauth2_client::{AuthorizationRequest, AuthorizationUrlError, ScopeDelimiter};
use fitlink_server::providers::OAuthProvider;
use url::Url;

fn provider_request<'a>(provider: OAuthProvider, state: Option<&'a str>) -> AuthorizationRequest<'a> {
    AuthorizationRequest {
        authorize_url: provider.authorize_url(),
        client_id: "client-42",
        redirect_uri: "https://app.example.com/oauth/callback?x=1",
        scopes: provider.scopes(),
        scope_delimiter: provider.scope_delimiter(),
        approval_prompt: provider.approval_prompt(),
        state,
    }
}

fn param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

// ============================================================================
// State parameter
// ============================================================================

#[test]
fn test_state_round_trips_exactly() {
    let states = [
        "abc123",
        "user-42_session.9~x",
        "a b&c=d/e?f",
        "eyJ1c2VyIjoiNDIifQ==",
        "ünïcødé",
    ];

    for provider in OAuthProvider::ALL {
        for state in states {
            let url = provider_request(provider, Some(state)).build().unwrap();
            assert_eq!(param(&url, "state").as_deref(), Some(state), "{provider} {state}");
        }
    }
}

#[test]
fn test_empty_or_absent_state_omitted() {
    for provider in OAuthProvider::ALL {
        for state in [None, Some("")] {
            let url = provider_request(provider, state).build().unwrap();
            assert!(param(&url, "state").is_none());
            assert!(!url.as_str().contains("state="));
        }
    }
}

// ============================================================================
// Provider formatting
// ============================================================================

#[test]
fn test_strava_url_shape() {
    let url = provider_request(OAuthProvider::Strava, Some("s")).build().unwrap();

    assert_eq!(url.host_str(), Some("www.strava.com"));
    assert_eq!(url.path(), "/oauth/authorize");
    assert_eq!(param(&url, "response_type").as_deref(), Some("code"));
    assert_eq!(param(&url, "client_id").as_deref(), Some("client-42"));
    assert_eq!(
        param(&url, "redirect_uri").as_deref(),
        Some("https://app.example.com/oauth/callback?x=1")
    );
    assert_eq!(param(&url, "scope").as_deref(), Some("read,activity:read_all"));
    assert_eq!(param(&url, "approval_prompt").as_deref(), Some("force"));

    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(
        keys,
        ["response_type", "client_id", "redirect_uri", "scope", "approval_prompt", "state"]
    );
}

#[test]
fn test_fitbit_url_shape() {
    let url = provider_request(OAuthProvider::Fitbit, None).build().unwrap();

    assert_eq!(url.host_str(), Some("www.fitbit.com"));
    assert_eq!(
        param(&url, "scope").as_deref(),
        Some("activity profile sleep heartrate weight")
    );
    assert!(param(&url, "approval_prompt").is_none());

    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, ["response_type", "client_id", "redirect_uri", "scope"]);
}

#[test]
fn test_scope_delimiter_join() {
    assert_eq!(ScopeDelimiter::Comma.join(&["a", "b"]), "a,b");
    assert_eq!(ScopeDelimiter::Space.join(&["a", "b"]), "a b");
    assert_eq!(ScopeDelimiter::Space.join(&[]), "");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_credentials_rejected() {
    let mut request = provider_request(OAuthProvider::Strava, None);
    request.client_id = "";
    assert_eq!(request.build(), Err(AuthorizationUrlError::MissingClientId));

    let mut request = provider_request(OAuthProvider::Strava, None);
    request.redirect_uri = "  ";
    assert_eq!(request.build(), Err(AuthorizationUrlError::MissingRedirectUri));
}

#[test]
fn test_invalid_authorize_url_rejected() {
    let mut request = provider_request(OAuthProvider::Fitbit, None);
    request.authorize_url = "not a url";
    assert!(matches!(
        request.build(),
        Err(AuthorizationUrlError::InvalidAuthorizeUrl { .. })
    ));
}
