//! RespondToInvitationHandler - Command handler consuming an invitation.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, UserId};
use crate::domain::group::{Group, GroupError};
use crate::ports::{EventPublisher, GroupRepository};

use super::stamped;

/// Command carrying an invited user's accept/decline decision.
#[derive(Debug, Clone)]
pub struct RespondToInvitationCommand {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub accept: bool,
}

/// Result of a consumed invitation.
#[derive(Debug, Clone)]
pub struct RespondToInvitationResult {
    pub group: Group,
}

/// Handler for invitation responses.
pub struct RespondToInvitationHandler {
    groups: Arc<dyn GroupRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RespondToInvitationHandler {
    pub fn new(groups: Arc<dyn GroupRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            groups,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RespondToInvitationCommand,
        metadata: CommandMetadata,
    ) -> Result<RespondToInvitationResult, GroupError> {
        let mut group = self
            .groups
            .find_by_id(&cmd.group_id)
            .await?
            .ok_or(GroupError::NotFound(cmd.group_id))?;

        group.handle_invited_user_response(&cmd.user_id, cmd.accept)?;

        self.groups.update(&group).await?;

        // Declining consumes the invitation without staging anything
        let events = stamped(group.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(RespondToInvitationResult { group })
    }
}
