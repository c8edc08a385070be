// ABOUTME: Re-exports the unified error types from fitlink-core
// ABOUTME: Keeps `crate::errors` paths stable for handlers and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitlink_core::errors::*;
