// ABOUTME: Main library entry point for the Fitlink fitness connector server
// ABOUTME: Provides OAuth connect endpoints, throttled activity import, and the dashboard API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Fitlink Server
//!
//! Backend for a fitness-tracking application that connects third-party platforms
//! (Strava, Fitbit) over OAuth, periodically imports activity data, and serves a
//! performance dashboard.
//!
//! ## Architecture
//!
//! - **Providers**: Per-provider OAuth constants (authorize URL, scopes, delimiter)
//! - **`OAuth2` client**: Authorization URL construction
//! - **Routes**: `/oauth/{provider}/connect`, `/dashboard`, `/health`
//! - **Importer**: Cooldown-gated trigger for the activity import endpoint
//! - **Database**: Read contract used by the dashboard, backed by `SQLite`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlink_server::config::environment::ServerConfig;
//! use fitlink_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Fitlink configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Session token verification and identity extraction
pub mod auth;

/// Configuration management from environment variables
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Shared server resources built once at startup
pub mod context;

/// Dashboard data loading with degraded fallbacks
pub mod dashboard;

/// Database abstraction and `SQLite` implementation
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Throttled background activity importer
pub mod importer;

/// Production logging and structured output
pub mod logging;

/// Core data models re-exported from `fitlink-core`
pub mod models;

/// `OAuth2` authorization URL construction
pub mod oauth2_client;

/// Fitness provider catalog
pub mod providers;

/// HTTP route handlers
pub mod routes;
