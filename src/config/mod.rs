// ABOUTME: Configuration module organization for the Fitlink server
// ABOUTME: Environment-driven server settings and per-provider OAuth credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All configuration is read from environment variables at startup and then passed
//! around explicitly; nothing re-reads the environment per request.

/// Server-level configuration from environment variables
pub mod environment;

/// OAuth provider credentials
pub mod oauth;
