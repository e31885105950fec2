//! CreateGroupHandler - Command handler for creating new groups.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, UserId};
use crate::domain::group::{Group, GroupError, GroupName};
use crate::ports::{EventPublisher, GroupRepository};

use super::stamped;

/// Command to create a new group.
#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    pub creator_id: UserId,
    pub name: String,
}

/// Result of successful group creation.
#[derive(Debug, Clone)]
pub struct CreateGroupResult {
    pub group: Group,
}

/// Handler for creating groups.
pub struct CreateGroupHandler {
    groups: Arc<dyn GroupRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateGroupHandler {
    pub fn new(groups: Arc<dyn GroupRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            groups,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateGroupCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateGroupResult, GroupError> {
        // 1. Validate the name and create the aggregate; the creator
        //    becomes the group's Master
        let name = GroupName::new(cmd.name)?;
        let mut group = Group::create(GroupId::new(), cmd.creator_id, name);

        // 2. Persist
        self.groups.save(&group).await?;

        // 3. Publish staged events only after the save succeeded
        let events = stamped(group.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(CreateGroupResult { group })
    }
}
