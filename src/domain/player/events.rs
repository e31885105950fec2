//! Player module domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, GroupId, PlayerId, Timestamp, UserId};

/// Published when a roster record transitions into the Master role.
///
/// Reserved for audit/notification consumers; the Player module itself
/// subscribes with a no-op handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMasterAppointed {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Roster record that became Master.
    pub player_id: PlayerId,

    /// Group the record belongs to.
    pub group_id: GroupId,

    /// User holding the record.
    pub user_id: UserId,

    /// When the appointment was applied.
    pub appointed_at: Timestamp,
}

domain_event!(
    NewMasterAppointed,
    event_type = "player.new_master_appointed",
    aggregate_id = player_id,
    aggregate_type = "Player",
    occurred_at = appointed_at,
    event_id = event_id
);
