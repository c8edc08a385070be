// ABOUTME: OAuth 2.0 client module for fitness provider authorization
// ABOUTME: Builds authorization redirect URLs for the connect endpoints
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Authorization URL construction
pub mod authorization;

pub use authorization::{AuthorizationRequest, AuthorizationUrlError, ScopeDelimiter};
