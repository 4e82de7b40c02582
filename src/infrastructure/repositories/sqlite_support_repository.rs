use crate::application::ports::output::support_ticket_port::SupportTicketPort;
use crate::core::platform::container::support_ticket::{SupportTicket, TicketStatus};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::sqlite_database::{format_timestamp, parse_timestamp};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteSupportRepository {
    pool: SqlitePool,
}

impl SqliteSupportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_ticket(row: &sqlx::sqlite::SqliteRow) -> AppResult<SupportTicket> {
        let id: String = row.try_get("id")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(SupportTicket {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::Internal(format!("Invalid ticket id: {}", e)))?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            subject: row.try_get("subject")?,
            message: row.try_get("message")?,
            category: row.try_get("category")?,
            priority: row.try_get("priority")?,
            status: status
                .parse::<TicketStatus>()
                .map_err(|e| AppError::Internal(format!("Invalid stored ticket status: {}", e)))?,
            admin_reply: row.try_get("admin_reply")?,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

#[async_trait]
impl SupportTicketPort for SqliteSupportRepository {
    async fn insert(&self, ticket: &SupportTicket) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO support_tickets (
                id, name, email, subject, message, category, priority,
                status, admin_reply, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ticket.id.to_string())
        .bind(&ticket.name)
        .bind(&ticket.email)
        .bind(&ticket.subject)
        .bind(&ticket.message)
        .bind(&ticket.category)
        .bind(&ticket.priority)
        .bind(ticket.status.as_str())
        .bind(&ticket.admin_reply)
        .bind(format_timestamp(&ticket.created_at))
        .bind(format_timestamp(&ticket.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<SupportTicket>> {
        let rows = sqlx::query("SELECT * FROM support_tickets ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_ticket).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SupportTicket>> {
        let row = sqlx::query("SELECT * FROM support_tickets WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_ticket).transpose()
    }

    async fn update(&self, ticket: &SupportTicket) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE support_tickets SET
                name = ?, email = ?, subject = ?, message = ?,
                category = ?, priority = ?, status = ?, admin_reply = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&ticket.name)
        .bind(&ticket.email)
        .bind(&ticket.subject)
        .bind(&ticket.message)
        .bind(&ticket.category)
        .bind(&ticket.priority)
        .bind(ticket.status.as_str())
        .bind(&ticket.admin_reply)
        .bind(format_timestamp(&ticket.updated_at))
        .bind(ticket.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM support_tickets WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
