//! Notification messages for users.
//!
//! Messages are created by event handlers reacting to Group and Match
//! events. The causing event's id is kept on the record so repositories
//! can upsert on (user, causation event) and redelivered events never
//! produce duplicate notifications.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    EventId, GroupId, MessageId, Timestamp, UserId, ValidationError,
};

/// Maximum length for a notification text.
pub const MAX_TEXT_LENGTH: usize = 500;

/// A notification message addressed to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    user_id: UserId,
    text: String,
    group_id: Option<GroupId>,
    causation_event_id: Option<EventId>,
    read: bool,
    created_at: Timestamp,
}

impl Message {
    /// Create a notification message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is empty
    /// - `OutOfRange` if the text exceeds 500 characters
    pub fn new(
        id: MessageId,
        user_id: UserId,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(ValidationError::out_of_range(
                "text",
                1,
                MAX_TEXT_LENGTH as i32,
                text.chars().count() as i32,
            ));
        }
        Ok(Self {
            id,
            user_id,
            text,
            group_id: None,
            causation_event_id: None,
            read: false,
            created_at: Timestamp::now(),
        })
    }

    /// Builder: attach the group the notification refers to.
    pub fn with_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Builder: attach the event id that caused this notification.
    pub fn with_causation_event(mut self, event_id: EventId) -> Self {
        self.causation_event_id = Some(event_id);
        self
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the addressed user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the notification text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the related group, if any.
    pub fn group_id(&self) -> Option<&GroupId> {
        self.group_id.as_ref()
    }

    /// Returns the causing event id, if any.
    pub fn causation_event_id(&self) -> Option<&EventId> {
        self.causation_event_id.as_ref()
    }

    /// Whether the user has read the message.
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Mark the message as read. Idempotent.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
