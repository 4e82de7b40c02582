use crate::application::ports::output::notification_port::NotificationPort;
use crate::core::platform::container::notification::{Notification, NotificationType};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::sqlite_database::{format_timestamp, parse_timestamp};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteNotificationRepository {
    pool: SqlitePool,
}

impl SqliteNotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &sqlx::sqlite::SqliteRow) -> AppResult<Notification> {
        let id: String = row.try_get("id")?;
        let kind: String = row.try_get("kind")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Notification {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::Internal(format!("Invalid notification id: {}", e)))?,
            title: row.try_get("title")?,
            message: row.try_get("message")?,
            kind: kind.parse::<NotificationType>().map_err(AppError::Internal)?,
            is_read: row.try_get("is_read")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl NotificationPort for SqliteNotificationRepository {
    async fn insert(&self, notification: &Notification) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO notifications (id, title, message, kind, is_read, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(notification.id.to_string())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind.as_str())
        .bind(notification.is_read)
        .bind(format_timestamp(&notification.created_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Notification>> {
        let rows = sqlx::query("SELECT * FROM notifications ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<Option<Notification>> {
        let row = sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = ? RETURNING *")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_notification).transpose()
    }

    async fn mark_all_read(&self) -> AppResult<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE is_read = 0")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
