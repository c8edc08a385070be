// ABOUTME: Session token sources for authenticating import requests
// ABOUTME: A missing token means "not signed in" and is not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

/// Supplies the current session's bearer credential
#[async_trait]
pub trait SessionTokenSource: Send + Sync {
    /// Current bearer token, or `None` when nobody is signed in
    async fn session_token(&self) -> Option<String>;
}

/// Token fixed at construction (CLI flag, environment variable, tests)
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    token: Option<String>,
}

impl StaticSession {
    /// Session with an optional token; empty strings count as absent
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Signed-out session
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl SessionTokenSource for StaticSession {
    async fn session_token(&self) -> Option<String> {
        self.token.clone()
    }
}
