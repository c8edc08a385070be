// ABOUTME: Database abstraction layer for the dashboard's read contract
// ABOUTME: Activity selection and count-only queries behind an async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database abstraction
//!
//! Handlers depend on `DatabaseProvider` rather than a concrete backend so the
//! connection pool is created once at startup and injected, and so tests can swap in
//! recording or failing implementations.

use crate::errors::AppResult;
use crate::models::Activity;
use async_trait::async_trait;
use uuid::Uuid;

/// `SQLite` implementation
pub mod sqlite;

pub use sqlite::SqliteDatabase;

/// Collections that support count queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Events, shared across all users
    Events,
    /// A user's registrations to events
    EventRegistrations,
}

impl Collection {
    /// Backing table name
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::EventRegistrations => "event_registrations",
        }
    }
}

/// Row filter for count queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountFilter {
    /// Count every row
    All,
    /// Count rows owned by one user
    User(Uuid),
}

/// Parameters for loading activities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Owner of the activities
    pub user_id: Uuid,
    /// Maximum rows to return, newest first
    pub limit: u32,
}

/// Event row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event identifier
    pub id: Uuid,
    /// Event title
    pub title: String,
}

/// Core database abstraction trait
#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Create tables if they do not exist
    async fn migrate(&self) -> AppResult<()>;

    /// Load a user's activities ordered by start time, newest first
    async fn select_activities(&self, query: &ActivityQuery) -> AppResult<Vec<Activity>>;

    /// Count rows in a collection without fetching them
    async fn count(&self, collection: Collection, filter: CountFilter) -> AppResult<i64>;

    /// Insert or replace an imported activity
    async fn upsert_activity(&self, activity: &Activity) -> AppResult<()>;

    /// Insert an event
    async fn create_event(&self, event: &EventRecord) -> AppResult<()>;

    /// Register a user for an event
    async fn register_for_event(&self, event_id: Uuid, user_id: Uuid) -> AppResult<()>;
}
