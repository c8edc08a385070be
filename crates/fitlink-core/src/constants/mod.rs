// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for providers, importer timing, routes, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Background importer timing and storage-key constants
pub mod import;
/// OAuth provider constants and configuration
pub mod oauth;

pub use oauth::*;

/// OAuth provider constants
pub mod oauth_providers {
    /// Re-export all OAuth constants
    pub use super::oauth::*;
}

/// HTTP route paths
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Dashboard endpoint
    pub const DASHBOARD: &str = "/dashboard";
    /// Login view unauthenticated dashboard requests are sent to
    pub const LOGIN: &str = "/login";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Dashboard loader limits
pub mod dashboard {
    /// Maximum number of activity records loaded for the dashboard
    pub const ACTIVITY_PAGE_SIZE: u32 = 500;
}

/// Authentication constants
pub mod auth {
    /// Cookie carrying the session JWT for browser clients
    pub const SESSION_COOKIE: &str = "auth_token";
    /// Default session lifetime in hours
    pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
}

/// Service identification for logs
pub mod service_names {
    /// Server binary service name
    pub const FITLINK_SERVER: &str = "fitlink-server";
}

/// Configuration defaults
pub mod defaults {
    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/fitlink.db";
    /// Development-only JWT secret used when `JWT_SECRET` is unset outside production
    pub const DEV_JWT_SECRET: &str = "fitlink-development-secret-change-me";
}
