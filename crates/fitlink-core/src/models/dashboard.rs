// ABOUTME: Dashboard view model combining recent activities and event counts
// ABOUTME: Defaults to an empty, zero-valued view when backend data is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Activity;

/// Data rendered by the performance dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Most recent activities, newest first
    pub activities: Vec<Activity>,
    /// Number of events across all users
    pub event_count: i64,
    /// Number of event registrations for the signed-in user
    pub registration_count: i64,
}
