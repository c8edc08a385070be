// ABOUTME: Re-exports the core data models from fitlink-core
// ABOUTME: Activity records and the dashboard view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitlink_core::models::*;
