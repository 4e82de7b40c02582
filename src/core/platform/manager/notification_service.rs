use crate::application::ports::output::notification_port::NotificationPort;
use crate::core::platform::container::notification::{Notification, NotificationType};
use crate::error::{AppError, AppResult};
use std::sync::Arc;
use uuid::Uuid;

pub struct NotificationService {
    notifications: Arc<dyn NotificationPort>,
}

impl NotificationService {
    pub fn new(notifications: Arc<dyn NotificationPort>) -> Self {
        Self { notifications }
    }

    /// Newest first
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.notifications.list().await
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<Notification> {
        self.notifications
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }

    pub async fn mark_all_read(&self) -> AppResult<u64> {
        let updated = self.notifications.mark_all_read().await?;
        tracing::debug!(updated, "notifications marked as read");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.notifications.delete(id).await? {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Store a sample notification; unlike emitted side effects, a failure here is reported
    pub async fn send_test(&self) -> AppResult<Notification> {
        let notification = Notification::new(
            "Test Notification",
            "This is a test notification from the backend",
            NotificationType::Info,
        );
        self.notifications.insert(&notification).await?;
        Ok(notification)
    }
}
