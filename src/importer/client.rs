// ABOUTME: Client for the activity import endpoint
// ABOUTME: Issues an authenticated GET with a lookback window and reports only the status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Import call failures that never produced an HTTP status
#[derive(Debug, Error)]
pub enum ImportError {
    /// Endpoint URL could not be parsed
    #[error("Invalid import endpoint '{url}': {reason}")]
    InvalidEndpoint {
        /// The rejected URL
        url: String,
        /// Parser message
        reason: String,
    },
    /// Request could not be sent or the connection failed
    #[error("Import request failed: {0}")]
    Transport(String),
}

/// HTTP status returned by the import endpoint; the body is not consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStatus {
    /// HTTP status code
    pub code: u16,
}

impl ImportStatus {
    /// 2xx status
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.code >= 200 && self.code < 300
    }
}

/// The import job endpoint
#[async_trait]
pub trait ImportApi: Send + Sync {
    /// Ask the backend to import `days` of history for the token's user
    async fn trigger_import(&self, bearer_token: &str, days: u32) -> Result<ImportStatus, ImportError>;
}

/// `reqwest`-based import client
#[derive(Debug, Clone)]
pub struct HttpImportClient {
    client: Client,
    endpoint: Url,
}

impl HttpImportClient {
    /// Create a client for the given endpoint (e.g. `https://app.example.com/api/strava/import`)
    ///
    /// Timeouts are left at the `reqwest` defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL
    pub fn new(endpoint: &str) -> Result<Self, ImportError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ImportError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// Request URL for a lookback window
    #[must_use]
    pub fn request_url(&self, days: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("days", &days.to_string());
        url
    }
}

#[async_trait]
impl ImportApi for HttpImportClient {
    async fn trigger_import(&self, bearer_token: &str, days: u32) -> Result<ImportStatus, ImportError> {
        let url = self.request_url(days);
        debug!(%url, "Triggering activity import");

        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|e| ImportError::Transport(e.to_string()))?;

        Ok(ImportStatus {
            code: response.status().as_u16(),
        })
    }
}
