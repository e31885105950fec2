//! InvitationNotifier - Notification message for invited users.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::domain::group::UserInvited;
use crate::ports::{EventHandler, MessageRepository};

use super::membership_tracker::{notify_once, parse};

/// Creates a notification message when a user is invited to a group.
///
/// Deduplicated on the causing event id, so a redelivered invitation
/// event never produces a second message.
pub struct InvitationNotifier {
    messages: Arc<dyn MessageRepository>,
}

impl InvitationNotifier {
    /// Creates a new InvitationNotifier.
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl EventHandler for InvitationNotifier {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let payload: UserInvited = parse(&event)?;
        let text = format!("You have been invited to join '{}'", payload.group_name);
        notify_once(
            &*self.messages,
            &payload.invited_id,
            payload.group_id,
            text,
            &event,
        )
        .await
    }

    fn name(&self) -> &'static str {
        "InvitationNotifier"
    }
}
