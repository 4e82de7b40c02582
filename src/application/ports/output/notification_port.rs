/*
Notification Port

Storage for user-facing notifications. Writes through this port are treated as
best-effort by the services that emit them.
*/

use crate::core::platform::container::notification::Notification;
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn insert(&self, notification: &Notification) -> AppResult<()>;

    /// All notifications, newest first
    async fn list(&self) -> AppResult<Vec<Notification>>;

    /// Flag one notification as read and return it
    async fn mark_read(&self, id: Uuid) -> AppResult<Option<Notification>>;

    /// Flag every unread notification as read; returns how many changed
    async fn mark_all_read(&self) -> AppResult<u64>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
