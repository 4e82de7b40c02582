use crate::application::ports::output::activity_log_port::ActivityLogPort;
use crate::core::platform::container::activity_log::ActivityLogEntry;
use crate::error::AppResult;
use std::sync::Arc;

/// Read side of the activity log; entries are written through the side-effect emitter
pub struct ActivityLogService {
    activity: Arc<dyn ActivityLogPort>,
}

impl ActivityLogService {
    pub fn new(activity: Arc<dyn ActivityLogPort>) -> Self {
        Self { activity }
    }

    pub async fn list(&self) -> AppResult<Vec<ActivityLogEntry>> {
        self.activity.list().await
    }
}
