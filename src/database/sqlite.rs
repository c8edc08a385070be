// ABOUTME: SQLite database implementation of the dashboard read contract
// ABOUTME: Creates tables on migrate and serves activity and count queries through sqlx
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ActivityQuery, Collection, CountFilter, DatabaseProvider, EventRecord};
use crate::errors::{AppError, AppResult};
use crate::models::Activity;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

/// `SQLite`-backed database
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Connect to a `SQLite` database and run migrations
    ///
    /// File databases are created if missing. In-memory databases use a single
    /// connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");
        let connection_url = if is_memory || database_url.contains('?') {
            database_url.to_owned()
        } else {
            format!("{database_url}?mode=rwc")
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(if is_memory { 1 } else { 5 })
            .connect(&connection_url)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to connect to {database_url}")).with_source(e)
            })?;

        let db = Self { pool };
        db.migrate().await?;
        info!("SQLite database ready: {database_url}");
        Ok(db)
    }
}

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    AppError::database(context.to_owned()).with_source(e)
}

fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn activity_from_row(row: &SqliteRow) -> AppResult<Activity> {
    let user_id: String = row.try_get("user_id").map_err(|e| db_error("user_id", e))?;
    let start_date: String = row
        .try_get("start_date")
        .map_err(|e| db_error("start_date", e))?;

    Ok(Activity {
        id: row.try_get("id").map_err(|e| db_error("id", e))?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| AppError::database(format!("Invalid activity user_id: {e}")))?,
        provider: row.try_get("provider").map_err(|e| db_error("provider", e))?,
        name: row.try_get("name").map_err(|e| db_error("name", e))?,
        sport_type: row
            .try_get("sport_type")
            .map_err(|e| db_error("sport_type", e))?,
        start_date: DateTime::parse_from_rfc3339(&start_date)
            .map_err(|e| AppError::database(format!("Invalid activity start_date: {e}")))?
            .with_timezone(&Utc),
        distance_meters: row
            .try_get("distance_meters")
            .map_err(|e| db_error("distance_meters", e))?,
        duration_seconds: row
            .try_get("duration_seconds")
            .map_err(|e| db_error("duration_seconds", e))?,
    })
}

const fn owner_column(collection: Collection) -> Option<&'static str> {
    match collection {
        Collection::Events => None,
        Collection::EventRegistrations => Some("user_id"),
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn migrate(&self) -> AppResult<()> {
        let statements = [
            r"
            CREATE TABLE IF NOT EXISTS activities (
                id TEXT NOT NULL,
                provider TEXT NOT NULL,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                sport_type TEXT NOT NULL,
                start_date TEXT NOT NULL,
                distance_meters REAL,
                duration_seconds INTEGER,
                PRIMARY KEY (provider, id)
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_activities_user_start ON activities(user_id, start_date DESC)",
            r"
            CREATE TABLE IF NOT EXISTS events (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS event_registrations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                event_id TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE,
                user_id TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(event_id, user_id)
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_event_registrations_user ON event_registrations(user_id)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| db_error("Migration failed", e))?;
        }
        Ok(())
    }

    async fn select_activities(&self, query: &ActivityQuery) -> AppResult<Vec<Activity>> {
        let rows = sqlx::query(
            r"
            SELECT id, provider, user_id, name, sport_type, start_date,
                   distance_meters, duration_seconds
            FROM activities
            WHERE user_id = ?1
            ORDER BY start_date DESC
            LIMIT ?2
            ",
        )
        .bind(query.user_id.to_string())
        .bind(i64::from(query.limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load activities", e))?;

        debug!(user_id = %query.user_id, rows = rows.len(), "Loaded activities");
        rows.iter().map(activity_from_row).collect()
    }

    async fn count(&self, collection: Collection, filter: CountFilter) -> AppResult<i64> {
        let table = collection.table();
        let count = match filter {
            CountFilter::All => {
                let sql = format!("SELECT COUNT(*) FROM {table}");
                sqlx::query_scalar::<_, i64>(&sql)
                    .fetch_one(&self.pool)
                    .await
            }
            CountFilter::User(user_id) => {
                let column = owner_column(collection).ok_or_else(|| {
                    AppError::invalid_input(format!("{table} cannot be filtered by user"))
                })?;
                let sql = format!("SELECT COUNT(*) FROM {table} WHERE {column} = ?1");
                sqlx::query_scalar::<_, i64>(&sql)
                    .bind(user_id.to_string())
                    .fetch_one(&self.pool)
                    .await
            }
        };

        count.map_err(|e| db_error(&format!("Failed to count {table}"), e))
    }

    async fn upsert_activity(&self, activity: &Activity) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO activities (id, provider, user_id, name, sport_type, start_date,
                                    distance_meters, duration_seconds)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(provider, id) DO UPDATE SET
                user_id = excluded.user_id,
                name = excluded.name,
                sport_type = excluded.sport_type,
                start_date = excluded.start_date,
                distance_meters = excluded.distance_meters,
                duration_seconds = excluded.duration_seconds
            ",
        )
        .bind(&activity.id)
        .bind(&activity.provider)
        .bind(activity.user_id.to_string())
        .bind(&activity.name)
        .bind(&activity.sport_type)
        .bind(encode_timestamp(&activity.start_date))
        .bind(activity.distance_meters)
        .bind(activity.duration_seconds)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to store activity", e))?;
        Ok(())
    }

    async fn create_event(&self, event: &EventRecord) -> AppResult<()> {
        sqlx::query("INSERT INTO events (id, title) VALUES (?1, ?2)")
            .bind(event.id.to_string())
            .bind(&event.title)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create event", e))?;
        Ok(())
    }

    async fn register_for_event(&self, event_id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO event_registrations (event_id, user_id) VALUES (?1, ?2)",
        )
        .bind(event_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to register for event", e))?;
        Ok(())
    }
}
