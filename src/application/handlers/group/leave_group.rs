//! LeaveGroupHandler - Command handler for leaving a group voluntarily.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, UserId};
use crate::domain::group::{Group, GroupError};
use crate::ports::{EventPublisher, GroupRepository};

use super::stamped;

/// Command for a player leaving a group.
#[derive(Debug, Clone)]
pub struct LeaveGroupCommand {
    pub group_id: GroupId,
    pub user_id: UserId,
}

/// Result of leaving a group.
#[derive(Debug, Clone)]
pub struct LeaveGroupResult {
    pub group: Group,
}

/// Handler for voluntary departures.
pub struct LeaveGroupHandler {
    groups: Arc<dyn GroupRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl LeaveGroupHandler {
    pub fn new(groups: Arc<dyn GroupRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            groups,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: LeaveGroupCommand,
        metadata: CommandMetadata,
    ) -> Result<LeaveGroupResult, GroupError> {
        let mut group = self
            .groups
            .find_by_id(&cmd.group_id)
            .await?
            .ok_or(GroupError::NotFound(cmd.group_id))?;

        group.user_leaves_group(&cmd.user_id)?;

        self.groups.update(&group).await?;

        let events = stamped(group.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(LeaveGroupResult { group })
    }
}
