// ABOUTME: Core data models for the Fitlink server
// ABOUTME: Re-exports Activity and DashboardView
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Activity rows are imported from providers by an external job and are read-only
//! here. `DashboardView` is what the dashboard route renders.

mod activity;
mod dashboard;

pub use activity::Activity;
pub use dashboard::DashboardView;
