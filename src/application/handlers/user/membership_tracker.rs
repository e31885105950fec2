//! MembershipTracker - Event handler maintaining users' group lists.
//!
//! Listens to Group events and keeps each `User`'s group membership
//! list in sync, creating a notification message when a membership
//! ends. `add_group`/`remove_group` are idempotent and notifications
//! are deduplicated on the causing event, so redelivery is safe.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, ErrorCode, EventEnvelope, GroupId, MessageId, UserId,
};
use crate::domain::group::{GroupCreated, InvitationAccepted, PlayerRemoved, UserLeft};
use crate::domain::user::Message;
use crate::ports::{EventHandler, MessageRepository, UserRepository};

/// Group event types the membership tracker subscribes to.
pub const MEMBERSHIP_EVENT_TYPES: &[&str] = &[
    "group.created",
    "group.invitation_accepted",
    "group.player_removed",
    "group.user_left",
];

/// Tracks which groups a user belongs to.
pub struct MembershipTracker {
    users: Arc<dyn UserRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl MembershipTracker {
    /// Creates a new MembershipTracker.
    pub fn new(users: Arc<dyn UserRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { users, messages }
    }

    async fn add_membership(
        &self,
        user_id: &UserId,
        group_id: GroupId,
    ) -> Result<(), DomainError> {
        let Some(mut user) = self.users.find_by_id(user_id).await? else {
            tracing::debug!(user_id = %user_id, "no user account for membership, skipping");
            return Ok(());
        };
        if user.add_group(group_id) {
            self.users.update(&user).await?;
        }
        Ok(())
    }

    async fn remove_membership(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
        notification: String,
        cause: &EventEnvelope,
    ) -> Result<(), DomainError> {
        if let Some(mut user) = self.users.find_by_id(user_id).await? {
            if user.remove_group(group_id) {
                self.users.update(&user).await?;
            }
        }
        notify_once(&*self.messages, user_id, *group_id, notification, cause).await
    }
}

#[async_trait]
impl EventHandler for MembershipTracker {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        match event.event_type.as_str() {
            "group.created" => {
                let payload: GroupCreated = parse(&event)?;
                self.add_membership(&payload.creator_id, payload.group_id).await
            }
            "group.invitation_accepted" => {
                let payload: InvitationAccepted = parse(&event)?;
                self.add_membership(&payload.user_id, payload.group_id).await
            }
            "group.player_removed" => {
                let payload: PlayerRemoved = parse(&event)?;
                let text = format!("You have been removed from '{}'", payload.group_name);
                self.remove_membership(&payload.user_id, &payload.group_id, text, &event)
                    .await
            }
            "group.user_left" => {
                let payload: UserLeft = parse(&event)?;
                let text = format!("You left '{}'", payload.group_name);
                self.remove_membership(&payload.user_id, &payload.group_id, text, &event)
                    .await
            }
            other => {
                tracing::debug!(event_type = other, "membership tracker ignores event");
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "MembershipTracker"
    }
}

pub(super) fn parse<T: serde::de::DeserializeOwned>(
    event: &EventEnvelope,
) -> Result<T, DomainError> {
    event
        .payload_as()
        .map_err(|e| DomainError::new(ErrorCode::ValidationFailed, e.to_string()))
}

/// Create a notification unless the causing event already produced one
/// for this user.
pub(super) async fn notify_once(
    messages: &dyn MessageRepository,
    user_id: &UserId,
    group_id: GroupId,
    text: String,
    cause: &EventEnvelope,
) -> Result<(), DomainError> {
    if messages
        .find_by_causation(user_id, &cause.event_id)
        .await?
        .is_some()
    {
        tracing::debug!(
            user_id = %user_id,
            event_id = %cause.event_id,
            "notification already created, skipping duplicate"
        );
        return Ok(());
    }
    let message = Message::new(MessageId::new(), user_id.clone(), text)?
        .with_group(group_id)
        .with_causation_event(cause.event_id.clone());
    messages.save(&message).await
}
