//! InviteUserHandler - Command handler for inviting a user to a group.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, UserId};
use crate::domain::group::{Group, GroupError};
use crate::ports::{EventPublisher, GroupRepository};

use super::stamped;

/// Command to invite a user into a group.
#[derive(Debug, Clone)]
pub struct InviteUserCommand {
    pub group_id: GroupId,
    pub invited_id: UserId,
    pub inviting_id: UserId,
}

/// Result of a successful invitation.
#[derive(Debug, Clone)]
pub struct InviteUserResult {
    pub group: Group,
}

/// Handler for inviting users.
pub struct InviteUserHandler {
    groups: Arc<dyn GroupRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl InviteUserHandler {
    pub fn new(groups: Arc<dyn GroupRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            groups,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: InviteUserCommand,
        metadata: CommandMetadata,
    ) -> Result<InviteUserResult, GroupError> {
        let mut group = self
            .groups
            .find_by_id(&cmd.group_id)
            .await?
            .ok_or(GroupError::NotFound(cmd.group_id))?;

        group.invite_user(cmd.invited_id, &cmd.inviting_id)?;

        self.groups.update(&group).await?;

        let events = stamped(group.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(InviteUserResult { group })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::group::tests::{
        seeded_group, MockGroupRepository, MockPublisher,
    };

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn master_invites_a_user() {
        let group = seeded_group("u1");
        let group_id = *group.id();
        let repo = Arc::new(MockGroupRepository::with_group(group));
        let publisher = Arc::new(MockPublisher::new());
        let handler = InviteUserHandler::new(repo.clone(), publisher.clone());

        let result = handler
            .handle(
                InviteUserCommand {
                    group_id,
                    invited_id: user("u2"),
                    inviting_id: user("u1"),
                },
                CommandMetadata::new(user("u1")),
            )
            .await
            .unwrap();

        assert_eq!(result.group.invited_user_ids(), &[user("u2")]);
        assert_eq!(publisher.published().len(), 1);
        assert_eq!(publisher.published()[0].event_type, "group.user_invited");
    }

    #[tokio::test]
    async fn missing_group_aborts_with_not_found() {
        let repo = Arc::new(MockGroupRepository::new());
        let publisher = Arc::new(MockPublisher::new());
        let handler = InviteUserHandler::new(repo, publisher.clone());
        let group_id = GroupId::new();

        let result = handler
            .handle(
                InviteUserCommand {
                    group_id,
                    invited_id: user("u2"),
                    inviting_id: user("u1"),
                },
                CommandMetadata::new(user("u1")),
            )
            .await;

        assert_eq!(result.unwrap_err(), GroupError::NotFound(group_id));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn rejected_invitation_publishes_nothing() {
        let group = seeded_group("u1");
        let group_id = *group.id();
        let repo = Arc::new(MockGroupRepository::with_group(group));
        let publisher = Arc::new(MockPublisher::new());
        let handler = InviteUserHandler::new(repo.clone(), publisher.clone());

        // u1 is already a player, inviting them must fail
        let result = handler
            .handle(
                InviteUserCommand {
                    group_id,
                    invited_id: user("u1"),
                    inviting_id: user("u1"),
                },
                CommandMetadata::new(user("u1")),
            )
            .await;

        assert_eq!(result.unwrap_err(), GroupError::AlreadyMember(user("u1")));
        assert!(publisher.published().is_empty());
        assert!(repo.updated().is_empty());
    }
}
