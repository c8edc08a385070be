// ABOUTME: Fake backends and resource builders shared by integration tests
// ABOUTME: Recording and failing database fakes, scripted import API, fixture activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitlink_server::{
    auth::AuthManager,
    config::oauth::{OAuthConfig, OAuthProviderConfig},
    context::ServerResources,
    database::{ActivityQuery, Collection, CountFilter, DatabaseProvider, EventRecord},
    errors::{AppError, AppResult},
    importer::{ImportApi, ImportError, ImportStatus},
    models::Activity,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret";

pub fn test_auth_manager() -> AuthManager {
    AuthManager::new(TEST_JWT_SECRET, 1)
}

pub fn configured_oauth() -> OAuthConfig {
    OAuthConfig {
        strava: OAuthProviderConfig::new("strava-client-123", "https://app.example.com/cb/strava"),
        fitbit: OAuthProviderConfig::new("fitbit-client-456", "https://app.example.com/cb/fitbit"),
    }
}

pub fn resources(oauth: OAuthConfig, database: Arc<dyn DatabaseProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(oauth, database, test_auth_manager()))
}

pub fn activity(user_id: Uuid, id: &str, start_date: DateTime<Utc>) -> Activity {
    Activity {
        id: id.to_owned(),
        user_id,
        provider: "strava".to_owned(),
        name: format!("Run {id}"),
        sport_type: "Run".to_owned(),
        start_date,
        distance_meters: Some(5_000.0),
        duration_seconds: Some(1_500),
    }
}

/// Database fake that counts every call and returns empty results
#[derive(Default)]
pub struct RecordingDatabase {
    pub calls: AtomicUsize,
}

impl RecordingDatabase {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DatabaseProvider for RecordingDatabase {
    async fn migrate(&self) -> AppResult<()> {
        self.record();
        Ok(())
    }

    async fn select_activities(&self, _query: &ActivityQuery) -> AppResult<Vec<Activity>> {
        self.record();
        Ok(Vec::new())
    }

    async fn count(&self, _collection: Collection, _filter: CountFilter) -> AppResult<i64> {
        self.record();
        Ok(0)
    }

    async fn upsert_activity(&self, _activity: &Activity) -> AppResult<()> {
        self.record();
        Ok(())
    }

    async fn create_event(&self, _event: &EventRecord) -> AppResult<()> {
        self.record();
        Ok(())
    }

    async fn register_for_event(&self, _event_id: Uuid, _user_id: Uuid) -> AppResult<()> {
        self.record();
        Ok(())
    }
}

/// Database fake where every query fails
pub struct FailingDatabase;

#[async_trait]
impl DatabaseProvider for FailingDatabase {
    async fn migrate(&self) -> AppResult<()> {
        Err(AppError::database("backend unavailable"))
    }

    async fn select_activities(&self, _query: &ActivityQuery) -> AppResult<Vec<Activity>> {
        Err(AppError::database("backend unavailable"))
    }

    async fn count(&self, _collection: Collection, _filter: CountFilter) -> AppResult<i64> {
        Err(AppError::database("backend unavailable"))
    }

    async fn upsert_activity(&self, _activity: &Activity) -> AppResult<()> {
        Err(AppError::database("backend unavailable"))
    }

    async fn create_event(&self, _event: &EventRecord) -> AppResult<()> {
        Err(AppError::database("backend unavailable"))
    }

    async fn register_for_event(&self, _event_id: Uuid, _user_id: Uuid) -> AppResult<()> {
        Err(AppError::database("backend unavailable"))
    }
}

/// Import API fake answering from a script; repeats the last answer when exhausted
pub struct ScriptedImportApi {
    responses: Mutex<VecDeque<Result<u16, String>>>,
    last: Mutex<Result<u16, String>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedImportApi {
    pub fn new(responses: Vec<Result<u16, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(Ok(200)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(code: u16) -> Self {
        Self::new(vec![Ok(code)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImportApi for ScriptedImportApi {
    async fn trigger_import(&self, bearer_token: &str, days: u32) -> Result<ImportStatus, ImportError> {
        self.calls
            .lock()
            .unwrap()
            .push((bearer_token.to_owned(), days));

        let next = self.responses.lock().unwrap().pop_front();
        let answer = match next {
            Some(answer) => {
                *self.last.lock().unwrap() = answer.clone();
                answer
            }
            None => self.last.lock().unwrap().clone(),
        };

        answer
            .map(|code| ImportStatus { code })
            .map_err(ImportError::Transport)
    }
}
