/*
SQLite Entity Repository Adapter

Concrete implementation of EntityStorePort. One table per entity kind, one JSON
document per row.
*/

use crate::application::ports::output::entity_store_port::EntityStorePort;
use crate::core::platform::container::entity::EntityKind;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::sqlite_database::{format_timestamp, parse_timestamp};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteEntityRepository {
    pool: SqlitePool,
}

/// Column values derived from a stored document
pub(crate) struct DocumentColumns {
    pub id: String,
    pub data: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DocumentColumns {
    pub(crate) fn from_document(document: &Value) -> AppResult<Self> {
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Internal("Document has no id".to_string()))?;
        let id = Uuid::parse_str(id)
            .map_err(|e| AppError::Internal(format!("Invalid document id '{}': {}", id, e)))?;

        let timestamp = |key: &str| -> AppResult<String> {
            let raw = document
                .get(key)
                .and_then(Value::as_str)
                .ok_or_else(|| AppError::Internal(format!("Document has no {}", key)))?;
            Ok(format_timestamp(&parse_timestamp(raw)?))
        };

        Ok(Self {
            id: id.to_string(),
            data: serde_json::to_string(document)?,
            created_at: timestamp("createdAt")?,
            updated_at: timestamp("updatedAt")?,
        })
    }
}

impl SqliteEntityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_document(row: &sqlx::sqlite::SqliteRow) -> AppResult<Value> {
        let data: String = row.try_get("data")?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn is_plain_key(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[async_trait]
impl EntityStorePort for SqliteEntityRepository {
    async fn find_all(&self, kind: EntityKind) -> AppResult<Vec<Value>> {
        let sql = format!(
            "SELECT data FROM {} ORDER BY created_at ASC, rowid ASC",
            kind.collection()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(Self::row_to_document).collect()
    }

    async fn find_by_id(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<Value>> {
        let sql = format!("SELECT data FROM {} WHERE id = ?", kind.collection());
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_document).transpose()
    }

    async fn find_id_by_field(&self, kind: EntityKind, field: &str, value: &str) -> AppResult<Option<Uuid>> {
        if !is_plain_key(field) {
            return Err(AppError::Internal(format!("Unsupported lookup field: {}", field)));
        }

        let sql = format!(
            "SELECT id FROM {} WHERE json_extract(data, ?) = ? LIMIT 1",
            kind.collection()
        );
        let row = sqlx::query(&sql)
            .bind(format!("$.{}", field))
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let id: String = row.try_get("id")?;
                let id = Uuid::parse_str(&id)
                    .map_err(|e| AppError::Internal(format!("Invalid stored id: {}", e)))?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, kind: EntityKind, document: &Value) -> AppResult<()> {
        let columns = DocumentColumns::from_document(document)?;
        let sql = format!(
            "INSERT INTO {} (id, data, created_at, updated_at) VALUES (?, ?, ?, ?)",
            kind.collection()
        );
        sqlx::query(&sql)
            .bind(&columns.id)
            .bind(&columns.data)
            .bind(&columns.created_at)
            .bind(&columns.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn replace(&self, kind: EntityKind, document: &Value) -> AppResult<bool> {
        let columns = DocumentColumns::from_document(document)?;
        let sql = format!(
            "UPDATE {} SET data = ?, updated_at = ? WHERE id = ?",
            kind.collection()
        );
        let result = sqlx::query(&sql)
            .bind(&columns.data)
            .bind(&columns.updated_at)
            .bind(&columns.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
