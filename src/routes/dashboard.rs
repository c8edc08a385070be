// ABOUTME: Dashboard route handler for the authenticated performance view
// ABOUTME: Redirects anonymous visitors to login before touching the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::endpoints;
use crate::context::ServerResources;
use crate::dashboard::DashboardService;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create the dashboard route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::DASHBOARD, get(Self::handle_dashboard))
            .with_state(resources)
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Response {
        let Some(user) = resources.auth_manager.current_user(&headers) else {
            debug!("Dashboard requested without a session, redirecting to login");
            return Redirect::to(endpoints::LOGIN).into_response();
        };

        let view = DashboardService::new(resources.database.clone())
            .load(&user)
            .await;

        Json(view).into_response()
    }
}
