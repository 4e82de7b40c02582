/*
Support Service

Ticket intake for end users and the admin workflow on top of it. `update` is the
single entry point used by `PUT /api/support/:id`; it dispatches a payload of
`{status?, adminReply?, ...}` onto the individual workflow operations.
*/

use crate::application::ports::output::support_ticket_port::SupportTicketPort;
use crate::core::platform::container::activity_log::ActivityAction;
use crate::core::platform::container::notification::NotificationType;
use crate::core::platform::container::support_ticket::{
    NewSupportTicket, SupportTicket, SupportTicketUpdate, TicketStatus,
};
use crate::core::platform::manager::side_effects::SideEffectEmitter;
use crate::error::{AppError, AppResult};
use std::sync::Arc;
use uuid::Uuid;

const ENTITY: &str = "Support";
const ANONYMOUS_REPORTER: &str = "User";

pub struct SupportService {
    tickets: Arc<dyn SupportTicketPort>,
    effects: Arc<SideEffectEmitter>,
}

impl SupportService {
    pub fn new(tickets: Arc<dyn SupportTicketPort>, effects: Arc<SideEffectEmitter>) -> Self {
        Self { tickets, effects }
    }

    /// Newest first
    pub async fn list(&self) -> AppResult<Vec<SupportTicket>> {
        self.tickets.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<SupportTicket> {
        self.tickets.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, submission: NewSupportTicket) -> AppResult<SupportTicket> {
        let ticket = SupportTicket::open(submission)?;
        self.tickets.insert(&ticket).await?;
        tracing::info!(ticket = %ticket.id, "support ticket opened");

        self.effects
            .notify("New Support Ticket", format!("Ticket: {}", ticket.subject), NotificationType::Info)
            .await;
        let reporter = if ticket.name.is_empty() { ANONYMOUS_REPORTER } else { ticket.name.as_str() };
        self.effects
            .record(reporter, ActivityAction::Create, ENTITY, format!("Created ticket: {}", ticket.subject))
            .await;

        Ok(ticket)
    }

    pub async fn update(&self, id: Uuid, update: SupportTicketUpdate) -> AppResult<SupportTicket> {
        let status = update
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<TicketStatus>)
            .transpose()?;
        let reply = update.admin_reply.as_deref().filter(|r| !r.trim().is_empty());

        let mut ticket = self.get(id).await?;
        ticket.apply_edits(&update);

        let mut resolved = false;
        match status {
            Some(next) => {
                resolved = ticket.transition_to(next)? && next == TicketStatus::Resolved;
                if let Some(reply) = reply {
                    ticket.record_reply(reply)?;
                }
            }
            None => {
                if let Some(reply) = reply {
                    ticket.attach_reply(reply)?;
                }
            }
        }

        self.save(&ticket).await?;
        self.announce(&ticket, resolved, reply.is_some()).await;
        Ok(ticket)
    }

    pub async fn mark_in_progress(&self, id: Uuid) -> AppResult<SupportTicket> {
        let mut ticket = self.get(id).await?;
        ticket.mark_in_progress()?;
        self.save(&ticket).await?;
        self.announce(&ticket, false, false).await;
        Ok(ticket)
    }

    pub async fn mark_resolved(&self, id: Uuid) -> AppResult<SupportTicket> {
        let mut ticket = self.get(id).await?;
        let changed = ticket.mark_resolved()?;
        self.save(&ticket).await?;
        self.announce(&ticket, changed, false).await;
        Ok(ticket)
    }

    pub async fn reply(&self, id: Uuid, reply: &str) -> AppResult<SupportTicket> {
        let mut ticket = self.get(id).await?;
        ticket.attach_reply(reply)?;
        self.save(&ticket).await?;
        self.announce(&ticket, false, true).await;
        Ok(ticket)
    }

    /// Hard delete; tickets never go through the recycle bin
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.tickets.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(ticket = %id, "support ticket deleted");
        Ok(())
    }

    async fn save(&self, ticket: &SupportTicket) -> AppResult<()> {
        if !self.tickets.update(ticket).await? {
            return Err(not_found());
        }
        tracing::info!(ticket = %ticket.id, status = %ticket.status, "support ticket updated");
        Ok(())
    }

    async fn announce(&self, ticket: &SupportTicket, resolved: bool, replied: bool) {
        if resolved {
            self.effects
                .notify("Ticket Resolved", format!("Resolved: {}", ticket.subject), NotificationType::Success)
                .await;
        }
        if replied {
            self.effects
                .notify("Support Reply", format!("Reply to: {}", ticket.subject), NotificationType::Info)
                .await;
        }
        self.effects
            .record_system(
                ActivityAction::Update,
                ENTITY,
                format!("Updated ticket {} ({})", ticket.subject, ticket.status),
            )
            .await;
    }
}

fn not_found() -> AppError {
    AppError::not_found("Ticket not found")
}
