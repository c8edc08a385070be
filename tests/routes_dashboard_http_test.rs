// ABOUTME: HTTP integration tests for the dashboard route
// ABOUTME: Covers login redirects, degraded backends, and the populated SQLite happy path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{Duration, TimeZone, Utc};
use fitlink_server::database::{DatabaseProvider, EventRecord, SqliteDatabase};
use fitlink_server::models::DashboardView;
use fitlink_server::routes::DashboardRoutes;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{
    activity, configured_oauth, resources, test_auth_manager, FailingDatabase, RecordingDatabase,
};
use std::sync::Arc;
use uuid::Uuid;

fn token_for(user_id: Uuid) -> String {
    test_auth_manager().generate_token(user_id, None).unwrap()
}

// ============================================================================
// Unauthenticated
// ============================================================================

#[tokio::test]
async fn test_no_session_redirects_to_login_without_queries() {
    let database = Arc::new(RecordingDatabase::default());
    let app = DashboardRoutes::routes(resources(configured_oauth(), database.clone()));

    let response = AxumTestRequest::get("/dashboard").send(app).await;

    assert_eq!(response.status(), 303);
    assert_eq!(response.header("location").as_deref(), Some("/login"));
    assert_eq!(database.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_session_redirects_to_login_without_queries() {
    let database = Arc::new(RecordingDatabase::default());
    let app = DashboardRoutes::routes(resources(configured_oauth(), database.clone()));

    let response = AxumTestRequest::get("/dashboard")
        .bearer("not-a-jwt")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 303);

    let foreign = fitlink_server::auth::AuthManager::new(b"other-secret", 1)
        .generate_token(Uuid::new_v4(), None)
        .unwrap();
    let response = AxumTestRequest::get("/dashboard")
        .header("cookie", &format!("auth_token={foreign}"))
        .send(app)
        .await;
    assert_eq!(response.status(), 303);

    assert_eq!(database.call_count(), 0);
}

// ============================================================================
// Authenticated, empty or failing backend
// ============================================================================

#[tokio::test]
async fn test_empty_backend_renders_empty_view() {
    let database = Arc::new(RecordingDatabase::default());
    let app = DashboardRoutes::routes(resources(configured_oauth(), database.clone()));

    let response = AxumTestRequest::get("/dashboard")
        .bearer(&token_for(Uuid::new_v4()))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let view: DashboardView = response.json();
    assert_eq!(view, DashboardView::default());
    assert_eq!(database.call_count(), 3);
}

#[tokio::test]
async fn test_failing_backend_degrades_to_defaults() {
    let app = DashboardRoutes::routes(resources(configured_oauth(), Arc::new(FailingDatabase)));

    let response = AxumTestRequest::get("/dashboard")
        .bearer(&token_for(Uuid::new_v4()))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let view: DashboardView = response.json();
    assert!(view.activities.is_empty());
    assert_eq!(view.event_count, 0);
    assert_eq!(view.registration_count, 0);
}

// ============================================================================
// Authenticated, populated SQLite
// ============================================================================

#[tokio::test]
async fn test_dashboard_with_sqlite_data() {
    let db = SqliteDatabase::connect("sqlite::memory:").await.unwrap();
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap();

    for (i, id) in ["a", "b", "c"].iter().enumerate() {
        db.upsert_activity(&activity(user_id, id, base + Duration::days(i as i64)))
            .await
            .unwrap();
    }
    db.upsert_activity(&activity(other_user, "z", base + Duration::days(10)))
        .await
        .unwrap();

    let events: Vec<EventRecord> = (0..3)
        .map(|i| EventRecord {
            id: Uuid::new_v4(),
            title: format!("Parkrun {i}"),
        })
        .collect();
    for event in &events {
        db.create_event(event).await.unwrap();
    }
    db.register_for_event(events[0].id, user_id).await.unwrap();
    db.register_for_event(events[1].id, other_user).await.unwrap();

    let app = DashboardRoutes::routes(resources(configured_oauth(), Arc::new(db)));
    let response = AxumTestRequest::get("/dashboard")
        .header("cookie", &format!("auth_token={}", token_for(user_id)))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let view: DashboardView = response.json();
    let ids: Vec<&str> = view.activities.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);
    assert_eq!(view.event_count, 3);
    assert_eq!(view.registration_count, 1);
}
