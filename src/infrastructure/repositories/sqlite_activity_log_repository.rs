use crate::application::ports::output::activity_log_port::ActivityLogPort;
use crate::core::platform::container::activity_log::{ActivityAction, ActivityLogEntry};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::sqlite_database::{format_timestamp, parse_timestamp};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteActivityLogRepository {
    pool: SqlitePool,
}

impl SqliteActivityLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &sqlx::sqlite::SqliteRow) -> AppResult<ActivityLogEntry> {
        let id: String = row.try_get("id")?;
        let action: String = row.try_get("action")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(ActivityLogEntry {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::Internal(format!("Invalid activity id: {}", e)))?,
            user: row.try_get("actor")?,
            action: action.parse::<ActivityAction>().map_err(AppError::Internal)?,
            entity: row.try_get("entity")?,
            details: row.try_get("details")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl ActivityLogPort for SqliteActivityLogRepository {
    async fn append(&self, entry: &ActivityLogEntry) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO activity_logs (id, actor, action, entity, details, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(entry.id.to_string())
        .bind(&entry.user)
        .bind(entry.action.as_str())
        .bind(&entry.entity)
        .bind(&entry.details)
        .bind(format_timestamp(&entry.created_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<ActivityLogEntry>> {
        let rows = sqlx::query("SELECT * FROM activity_logs ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }
}
