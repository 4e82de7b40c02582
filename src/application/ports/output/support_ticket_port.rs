use crate::core::platform::container::support_ticket::SupportTicket;
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SupportTicketPort: Send + Sync {
    async fn insert(&self, ticket: &SupportTicket) -> AppResult<()>;

    /// All tickets, newest first
    async fn list(&self) -> AppResult<Vec<SupportTicket>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SupportTicket>>;

    /// Persist a modified ticket; returns false when the ID does not resolve
    async fn update(&self, ticket: &SupportTicket) -> AppResult<bool>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
