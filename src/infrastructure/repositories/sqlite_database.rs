/*
SQLite Database

Owns the connection pool shared by every repository adapter and creates the schema.
Entity collections are stored one document per row: the full JSON document lives in
`data`, with `id` and the timestamps duplicated into columns for lookups and ordering.
*/

use crate::config::application_settings::DatabaseConfig;
use crate::core::platform::container::entity::EntityKind;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using the configured URL and run migrations
    pub async fn connect(settings: &DatabaseConfig) -> AppResult<Self> {
        let in_memory = is_in_memory(&settings.url);

        // Every connection to `sqlite::memory:` opens its own empty database, so an
        // in-memory pool must hold exactly one connection and never recycle it.
        let options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(settings.max_connections.max(1))
        };

        // Writers wait for the lock instead of failing straight away with SQLITE_BUSY
        let connect_options = SqliteConnectOptions::from_str(&settings.url)
            .map_err(|e| AppError::Internal(format!("Invalid database url '{}': {}", settings.url, e)))?
            .busy_timeout(BUSY_TIMEOUT);

        let pool = options
            .connect_with(connect_options)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))?;

        let database = Self { pool };
        database.migrate().await?;

        tracing::info!(url = %settings.url, in_memory, "database ready");
        Ok(database)
    }

    /// Fresh private in-memory database, used by tests
    pub async fn in_memory() -> AppResult<Self> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes; safe to run repeatedly
    pub async fn migrate(&self) -> AppResult<()> {
        for kind in EntityKind::ALL {
            let table = kind.collection();
            let create = format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    id TEXT PRIMARY KEY NOT NULL,
                    data TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#
            );
            self.execute(&create).await?;
            self.execute(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_created_at ON {table}(created_at)"
            ))
            .await?;

            for key in kind.unique_keys() {
                self.execute(&format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS idx_{table}_{key} ON {table}(json_extract(data, '$.{key}'))"
                ))
                .await?;
            }
        }

        self.execute(
            r#"
            CREATE TABLE IF NOT EXISTS recycle_bin (
                id TEXT PRIMARY KEY NOT NULL,
                entity_type TEXT NOT NULL,
                data TEXT NOT NULL,
                deleted_at TEXT NOT NULL
            )
            "#,
        )
        .await?;
        self.execute("CREATE INDEX IF NOT EXISTS idx_recycle_bin_deleted_at ON recycle_bin(deleted_at)")
            .await?;

        self.execute(
            r#"
            CREATE TABLE IF NOT EXISTS notifications (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                message TEXT NOT NULL,
                kind TEXT NOT NULL,
                is_read BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .await?;

        self.execute(
            r#"
            CREATE TABLE IF NOT EXISTS activity_logs (
                id TEXT PRIMARY KEY NOT NULL,
                actor TEXT NOT NULL,
                action TEXT NOT NULL,
                entity TEXT NOT NULL,
                details TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .await?;

        self.execute(
            r#"
            CREATE TABLE IF NOT EXISTS support_tickets (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                category TEXT NOT NULL,
                priority TEXT NOT NULL,
                status TEXT NOT NULL,
                admin_reply TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .await?;

        Ok(())
    }

    async fn execute(&self, sql: &str) -> AppResult<()> {
        sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AppError::Internal(format!("Invalid stored timestamp '{}': {}", value, e)))
}
