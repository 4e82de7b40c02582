/*
Activity Log Container

Append-only audit trail entries. Each entry records who performed which action on
which kind of record; entries are immutable once written.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
    Login,
    Register,
    Restore,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Create => "CREATE",
            ActivityAction::Update => "UPDATE",
            ActivityAction::Delete => "DELETE",
            ActivityAction::Login => "LOGIN",
            ActivityAction::Register => "REGISTER",
            ActivityAction::Restore => "RESTORE",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CREATE" => Ok(ActivityAction::Create),
            "UPDATE" => Ok(ActivityAction::Update),
            "DELETE" => Ok(ActivityAction::Delete),
            "LOGIN" => Ok(ActivityAction::Login),
            "REGISTER" => Ok(ActivityAction::Register),
            "RESTORE" => Ok(ActivityAction::Restore),
            other => Err(format!("unknown activity action: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub user: String,
    pub action: ActivityAction,
    pub entity: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(
        user: impl Into<String>,
        action: ActivityAction,
        entity: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            action,
            entity: entity.into(),
            details: details.into(),
            created_at: Utc::now(),
        }
    }

    /// One-line rendering used in trace output
    pub fn formatted(&self) -> String {
        format!("[{}] {} {}: {}", self.action, self.user, self.entity, self.details)
    }
}
