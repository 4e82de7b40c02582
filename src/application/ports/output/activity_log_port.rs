use crate::core::platform::container::activity_log::ActivityLogEntry;
use crate::error::AppResult;
use async_trait::async_trait;

/// Append-only storage for the activity log
#[async_trait]
pub trait ActivityLogPort: Send + Sync {
    async fn append(&self, entry: &ActivityLogEntry) -> AppResult<()>;

    /// All entries, newest first
    async fn list(&self) -> AppResult<Vec<ActivityLogEntry>>;
}
