/*
Side Effect Emitter

Notifications and activity-log entries are auxiliary records: a failure to write
one must never fail or roll back the operation that triggered it. Every method here
returns `()`; write errors are logged and dropped.
*/

use crate::application::ports::output::activity_log_port::ActivityLogPort;
use crate::application::ports::output::notification_port::NotificationPort;
use crate::core::platform::container::activity_log::{ActivityAction, ActivityLogEntry};
use crate::core::platform::container::notification::{Notification, NotificationType};
use std::sync::Arc;

pub struct SideEffectEmitter {
    notifications: Arc<dyn NotificationPort>,
    activity: Arc<dyn ActivityLogPort>,
    default_actor: String,
}

impl SideEffectEmitter {
    pub fn new(
        notifications: Arc<dyn NotificationPort>,
        activity: Arc<dyn ActivityLogPort>,
        default_actor: impl Into<String>,
    ) -> Self {
        Self {
            notifications,
            activity,
            default_actor: default_actor.into(),
        }
    }

    /// Actor recorded for operations performed without a known user
    pub fn default_actor(&self) -> &str {
        &self.default_actor
    }

    pub async fn notify(&self, title: impl Into<String>, message: impl Into<String>, kind: NotificationType) {
        let notification = Notification::new(title, message, kind);
        if let Err(e) = self.notifications.insert(&notification).await {
            tracing::warn!(
                error = %e,
                title = %notification.title,
                "failed to store notification"
            );
        }
    }

    pub async fn record(
        &self,
        user: impl Into<String>,
        action: ActivityAction,
        entity: impl Into<String>,
        details: impl Into<String>,
    ) {
        let entry = ActivityLogEntry::new(user, action, entity, details);
        tracing::debug!(activity = %entry.formatted(), "recording activity");
        if let Err(e) = self.activity.append(&entry).await {
            tracing::warn!(error = %e, activity = %entry.formatted(), "failed to store activity log entry");
        }
    }

    /// Record an action attributed to the default actor
    pub async fn record_system(&self, action: ActivityAction, entity: impl Into<String>, details: impl Into<String>) {
        let actor = self.default_actor.clone();
        self.record(actor, action, entity, details).await;
    }
}
