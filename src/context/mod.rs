// ABOUTME: Shared server resources constructed once at startup and injected into handlers
// ABOUTME: Holds configuration, the database handle, and the session auth manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dependency injection for route handlers
//!
//! `ServerResources` is built once by the server binary and handed to every router
//! behind an `Arc`. Handlers never construct their own database or auth clients.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::config::oauth::OAuthConfig;
use crate::database::DatabaseProvider;
use std::sync::Arc;

/// Resources shared by all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Provider OAuth credentials
    pub oauth: Arc<OAuthConfig>,
    /// Backend query client
    pub database: Arc<dyn DatabaseProvider>,
    /// Session token verification
    pub auth_manager: Arc<AuthManager>,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        oauth: OAuthConfig,
        database: Arc<dyn DatabaseProvider>,
        auth_manager: AuthManager,
    ) -> Self {
        Self {
            oauth: Arc::new(oauth),
            database,
            auth_manager: Arc::new(auth_manager),
        }
    }

    /// Assemble resources from the loaded server configuration
    #[must_use]
    pub fn from_config(config: &ServerConfig, database: Arc<dyn DatabaseProvider>) -> Self {
        Self::new(
            config.oauth.clone(),
            database,
            AuthManager::new(
                config.auth.jwt_secret.as_bytes(),
                config.auth.jwt_expiry_hours,
            ),
        )
    }
}
