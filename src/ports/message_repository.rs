//! Message repository port.
//!
//! Notification messages are created by event handlers under
//! at-least-once delivery, so `save` is an upsert keyed on
//! `(user_id, causation_event_id)` when a causation id is present:
//! saving the same notification for the same causing event twice keeps
//! a single record.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::user::Message;

/// Repository port for notification message persistence.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Save a message, upserting on (user, causation event).
    async fn save(&self, message: &Message) -> Result<(), DomainError>;

    /// Find all messages addressed to a user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Message>, DomainError>;

    /// Find the message a specific event produced for a user, if any.
    async fn find_by_causation(
        &self,
        user_id: &UserId,
        causation_event_id: &EventId,
    ) -> Result<Option<Message>, DomainError>;
}
