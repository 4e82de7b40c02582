/*
SQLite Recycle Bin Repository Adapter

Implements RecycleBinPort. Soft delete and restore each run inside one transaction
that opens with its write, so concurrent callers queue on the database lock instead
of failing to upgrade a read. A soft delete removes the source row and snapshots
what it removed; when two deletes of the same document race, the second one removes
nothing and rolls back, leaving exactly one bin entry.
*/

use crate::application::ports::output::recycle_bin_port::RecycleBinPort;
use crate::core::platform::container::entity::EntityKind;
use crate::core::platform::container::recycle_bin::RecycleBinEntry;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::sqlite_database::{format_timestamp, parse_timestamp};
use crate::infrastructure::repositories::sqlite_entity_repository::DocumentColumns;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteRecycleBinRepository {
    pool: SqlitePool,
}

impl SqliteRecycleBinRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &sqlx::sqlite::SqliteRow) -> AppResult<RecycleBinEntry> {
        let id: String = row.try_get("id")?;
        let data: String = row.try_get("data")?;
        let deleted_at: String = row.try_get("deleted_at")?;

        Ok(RecycleBinEntry {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::Internal(format!("Invalid recycle bin id: {}", e)))?,
            entity_type: row.try_get("entity_type")?,
            data: serde_json::from_str(&data)?,
            deleted_at: parse_timestamp(&deleted_at)?,
        })
    }
}

#[async_trait]
impl RecycleBinPort for SqliteRecycleBinRepository {
    async fn move_to_bin(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<RecycleBinEntry>> {
        let mut tx = self.pool.begin().await?;

        // The first statement must be the write: a transaction that reads first
        // cannot upgrade its lock once a concurrent delete holds it.
        let delete = format!("DELETE FROM {} WHERE id = ? RETURNING data", kind.collection());
        let removed = sqlx::query(&delete)
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;
        let Some(row) = removed else {
            tx.rollback().await?;
            return Ok(None);
        };

        let data: String = row.try_get("data")?;
        let entry = RecycleBinEntry::new(kind, serde_json::from_str(&data)?);

        sqlx::query("INSERT INTO recycle_bin (id, entity_type, data, deleted_at) VALUES (?, ?, ?, ?)")
            .bind(entry.id.to_string())
            .bind(&entry.entity_type)
            .bind(&data)
            .bind(format_timestamp(&entry.deleted_at))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(entry))
    }

    async fn restore(&self, entry: &RecycleBinEntry, kind: EntityKind) -> AppResult<bool> {
        let columns = DocumentColumns::from_document(&entry.data)?;
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM recycle_bin WHERE id = ?")
            .bind(entry.id.to_string())
            .execute(&mut *tx)
            .await?;
        if removed.rows_affected() != 1 {
            tx.rollback().await?;
            return Ok(false);
        }

        let insert = format!(
            "INSERT INTO {} (id, data, created_at, updated_at) VALUES (?, ?, ?, ?)",
            kind.collection()
        );
        sqlx::query(&insert)
            .bind(&columns.id)
            .bind(&columns.data)
            .bind(&columns.created_at)
            .bind(&columns.updated_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn list(&self) -> AppResult<Vec<RecycleBinEntry>> {
        let rows = sqlx::query("SELECT * FROM recycle_bin ORDER BY deleted_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RecycleBinEntry>> {
        let row = sqlx::query("SELECT * FROM recycle_bin WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_entry).transpose()
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recycle_bin WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM recycle_bin")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
