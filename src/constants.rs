// ABOUTME: Re-exports the application constants from fitlink-core
// ABOUTME: Provider identifiers, importer timing, endpoints, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitlink_core::constants::*;
