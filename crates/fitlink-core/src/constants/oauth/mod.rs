// ABOUTME: OAuth-related constants and configuration values
// ABOUTME: Includes provider identifiers and OAuth configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! OAuth constants module

/// OAuth provider constants
pub mod providers;

/// Re-export all OAuth provider constants
pub use providers::*;
