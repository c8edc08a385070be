// ABOUTME: Dashboard data loader combining recent activities and event counts
// ABOUTME: Favors availability: any backend failure degrades to an empty or zero value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard data loading
//!
//! The three queries are independent and run concurrently. A failing query is logged
//! and replaced by its default so the page always renders.

use crate::auth::AuthenticatedUser;
use crate::constants::dashboard::ACTIVITY_PAGE_SIZE;
use crate::database::{ActivityQuery, Collection, CountFilter, DatabaseProvider};
use crate::errors::AppResult;
use crate::models::DashboardView;
use std::sync::Arc;
use tracing::warn;

/// Loads dashboard data for an authenticated user
pub struct DashboardService {
    database: Arc<dyn DatabaseProvider>,
}

impl DashboardService {
    /// Create a loader over the shared database handle
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseProvider>) -> Self {
        Self { database }
    }

    /// Load the dashboard view for a user
    pub async fn load(&self, user: &AuthenticatedUser) -> DashboardView {
        let query = ActivityQuery {
            user_id: user.user_id,
            limit: ACTIVITY_PAGE_SIZE,
        };

        let (activities, event_count, registration_count) = tokio::join!(
            self.database.select_activities(&query),
            self.database.count(Collection::Events, CountFilter::All),
            self.database
                .count(Collection::EventRegistrations, CountFilter::User(user.user_id)),
        );

        DashboardView {
            activities: or_default(activities, "activities"),
            event_count: or_default(event_count, "event count"),
            registration_count: or_default(registration_count, "registration count"),
        }
    }
}

fn or_default<T: Default>(result: AppResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        warn!("Dashboard {what} unavailable, using default: {e}");
        T::default()
    })
}
