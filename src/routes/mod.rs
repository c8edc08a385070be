// ABOUTME: Route module organization for the Fitlink HTTP server
// ABOUTME: Assembles health, OAuth connect, and dashboard routers with request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the service layer.

/// Dashboard route
pub mod dashboard;
/// Health check route
pub mod health;
/// OAuth connect routes
pub mod oauth;

pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;
pub use oauth::OAuthRoutes;

use crate::context::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(OAuthRoutes::routes(resources.clone()))
        .merge(DashboardRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
