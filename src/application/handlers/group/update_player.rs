//! UpdatePlayerHandler - Command handler for role/status updates.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, PlayerStatus, Role, UserId};
use crate::domain::group::{Group, GroupError};
use crate::ports::{EventPublisher, GroupRepository};

use super::stamped;

/// Command to update a player's role and/or status.
///
/// Leaving `new_status` unset preserves the target's current status
/// (role-only update); promotion to Master then forces Active.
#[derive(Debug, Clone)]
pub struct UpdatePlayerCommand {
    pub group_id: GroupId,
    pub acting_id: UserId,
    pub target_id: UserId,
    pub new_role: Role,
    pub new_status: Option<PlayerStatus>,
}

/// Result of a player update.
#[derive(Debug, Clone)]
pub struct UpdatePlayerResult {
    pub group: Group,
}

/// Handler for player role/status updates.
pub struct UpdatePlayerHandler {
    groups: Arc<dyn GroupRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdatePlayerHandler {
    pub fn new(groups: Arc<dyn GroupRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            groups,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePlayerCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdatePlayerResult, GroupError> {
        let mut group = self
            .groups
            .find_by_id(&cmd.group_id)
            .await?
            .ok_or(GroupError::NotFound(cmd.group_id))?;

        let version_before = group.version();
        match cmd.new_status {
            Some(status) => {
                group.update_player(&cmd.acting_id, &cmd.target_id, cmd.new_role, status)?
            }
            None => group.update_player_role(&cmd.acting_id, &cmd.target_id, cmd.new_role)?,
        }

        // A no-op update mutates nothing and stages nothing; skip the
        // write so the version check stays honest
        if group.version() == version_before {
            return Ok(UpdatePlayerResult { group });
        }

        self.groups.update(&group).await?;

        let events = stamped(group.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(UpdatePlayerResult { group })
    }
}
