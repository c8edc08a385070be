// ABOUTME: Imported fitness activity record as stored by the backend
// ABOUTME: Read-only from the dashboard's perspective, ordered by start date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single imported fitness activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Provider-scoped activity identifier
    pub id: String,
    /// Owner of the activity
    pub user_id: Uuid,
    /// Provider the activity was imported from (e.g. "strava")
    pub provider: String,
    /// Activity title
    pub name: String,
    /// Provider sport type (e.g. "Run", "Ride")
    pub sport_type: String,
    /// When the activity started (UTC)
    pub start_date: DateTime<Utc>,
    /// Distance covered in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    /// Elapsed time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}
