//! RemovePlayerHandler - Command handler for removing a player.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, UserId};
use crate::domain::group::{Group, GroupError};
use crate::ports::{EventPublisher, GroupRepository};

use super::stamped;

/// Command to remove a player from a group.
#[derive(Debug, Clone)]
pub struct RemovePlayerCommand {
    pub group_id: GroupId,
    pub remove_id: UserId,
    pub acting_id: UserId,
}

/// Result of a removal.
#[derive(Debug, Clone)]
pub struct RemovePlayerResult {
    pub group: Group,
}

/// Handler for removing players.
pub struct RemovePlayerHandler {
    groups: Arc<dyn GroupRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RemovePlayerHandler {
    pub fn new(groups: Arc<dyn GroupRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            groups,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RemovePlayerCommand,
        metadata: CommandMetadata,
    ) -> Result<RemovePlayerResult, GroupError> {
        let mut group = self
            .groups
            .find_by_id(&cmd.group_id)
            .await?
            .ok_or(GroupError::NotFound(cmd.group_id))?;

        group.remove_player(&cmd.remove_id, &cmd.acting_id)?;

        self.groups.update(&group).await?;

        let events = stamped(group.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(RemovePlayerResult { group })
    }
}
