/*
Support Ticket Container

Tickets are submitted by users and moved forward by administrators:

    open ──> in-progress ──> resolved
      └────────────────────────^

Attaching an admin reply to an open ticket moves it to in-progress. A resolved
ticket is terminal: it can still receive replies, but its status never moves back.
*/

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_PRIORITY: &str = "Medium";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
        }
    }

    /// Staying in the same state is always allowed
    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        matches!(
            (self, next),
            (TicketStatus::Open, _)
                | (TicketStatus::InProgress, TicketStatus::InProgress)
                | (TicketStatus::InProgress, TicketStatus::Resolved)
                | (TicketStatus::Resolved, TicketStatus::Resolved)
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in-progress" | "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            other => Err(AppError::Validation(format!("Unknown ticket status: {}", other))),
        }
    }
}

/// Body of `POST /api/support`; any status sent by the client is ignored
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupportTicket {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

/// Body of `PUT /api/support/:id`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketUpdate {
    pub status: Option<String>,
    pub admin_reply: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub category: String,
    pub priority: String,
    pub status: TicketStatus,
    pub admin_reply: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl SupportTicket {
    /// Build a new open ticket from a user submission
    pub fn open(submission: NewSupportTicket) -> AppResult<Self> {
        let subject = non_blank(submission.subject)
            .ok_or_else(|| AppError::validation("Ticket subject is required"))?;
        let message = non_blank(submission.message)
            .ok_or_else(|| AppError::validation("Ticket message is required"))?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: non_blank(submission.name).unwrap_or_default(),
            email: non_blank(submission.email).unwrap_or_default(),
            subject,
            message,
            category: non_blank(submission.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            priority: non_blank(submission.priority).unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            status: TicketStatus::Open,
            admin_reply: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Move to `next`; returns whether the status actually changed
    pub fn transition_to(&mut self, next: TicketStatus) -> AppResult<bool> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::Validation(format!(
                "Ticket cannot move from {} to {}",
                self.status, next
            )));
        }
        let changed = self.status != next;
        self.status = next;
        self.touch();
        Ok(changed)
    }

    pub fn mark_in_progress(&mut self) -> AppResult<bool> {
        self.transition_to(TicketStatus::InProgress)
    }

    pub fn mark_resolved(&mut self) -> AppResult<bool> {
        self.transition_to(TicketStatus::Resolved)
    }

    /// Store an admin reply; an open ticket moves to in-progress
    pub fn attach_reply(&mut self, reply: &str) -> AppResult<()> {
        self.record_reply(reply)?;
        if self.status == TicketStatus::Open {
            self.status = TicketStatus::InProgress;
        }
        Ok(())
    }

    /// Store an admin reply without touching the status
    pub fn record_reply(&mut self, reply: &str) -> AppResult<()> {
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(AppError::validation("Reply message cannot be empty"));
        }
        self.admin_reply = reply.to_string();
        self.touch();
        Ok(())
    }

    /// Apply editable descriptive fields; blank values leave a field unchanged
    pub fn apply_edits(&mut self, update: &SupportTicketUpdate) {
        let edits = [
            (&mut self.name, &update.name),
            (&mut self.email, &update.email),
            (&mut self.subject, &update.subject),
            (&mut self.message, &update.message),
            (&mut self.category, &update.category),
            (&mut self.priority, &update.priority),
        ];
        for (field, value) in edits {
            if let Some(value) = non_blank(value.clone()) {
                *field = value;
            }
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
