// ABOUTME: Core types and constants for the Fitlink fitness connector server
// ABOUTME: Foundation crate with error handling, provider constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlink Core
//!
//! Foundation crate providing shared types and constants for the Fitlink server and
//! its sync client. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Provider identifiers, scopes, and importer timing constants
//! - **models**: Activity records and dashboard summaries

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Activity, `DashboardView`)
pub mod models;
