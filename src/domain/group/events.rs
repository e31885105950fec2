//! Group domain events.
//!
//! Events staged by the Group aggregate when its state changes:
//! - `GroupCreated` - New group created with its founding Master
//! - `UserInvited` - Invitation extended to a user
//! - `InvitationAccepted` - Invited user joined as a Member
//! - `PlayerUpdated` - A player's role and/or status changed
//! - `MasterChanged` - Master succession (single event for the whole transition)
//! - `PlayerRemoved` - Player removed by a higher-ranking player
//! - `UserLeft` - Player left the group voluntarily
//! - `InviteLevelChanged` - Minimum inviting role reconfigured
//!
//! Declining an invitation mutates the invited set but stages no event.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventId, GroupId, PlayerStatus, Role, Timestamp, UserId,
};

// ════════════════════════════════════════════════════════════════════════════
// GroupCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new group is created.
///
/// The creator becomes the group's Master with Active status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created group.
    pub group_id: GroupId,

    /// Group name.
    pub name: String,

    /// User who created the group (its first Master).
    pub creator_id: UserId,

    /// When the group was created.
    pub created_at: Timestamp,
}

domain_event!(
    GroupCreated,
    event_type = "group.created",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserInvited
// ════════════════════════════════════════════════════════════════════════════

/// Published when a user is invited to a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInvited {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the inviting group.
    pub group_id: GroupId,

    /// Group name, carried so notification handlers need no extra lookup.
    pub group_name: String,

    /// User being invited.
    pub invited_id: UserId,

    /// Player who extended the invitation.
    pub inviting_id: UserId,

    /// When the invitation was extended.
    pub invited_at: Timestamp,
}

domain_event!(
    UserInvited,
    event_type = "group.user_invited",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = invited_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// InvitationAccepted
// ════════════════════════════════════════════════════════════════════════════

/// Published when an invited user accepts and joins as a Member.
///
/// Declining consumes the invitation without an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationAccepted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the group joined.
    pub group_id: GroupId,

    /// User who accepted the invitation.
    pub user_id: UserId,

    /// When the invitation was accepted.
    pub accepted_at: Timestamp,
}

domain_event!(
    InvitationAccepted,
    event_type = "group.invitation_accepted",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = accepted_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a player's role and/or status changes.
///
/// Master succession is NOT reported through this event; see
/// [`MasterChanged`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerUpdated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the group.
    pub group_id: GroupId,

    /// Player whose role/status changed.
    pub user_id: UserId,

    /// Player who performed the update.
    pub updated_by: UserId,

    /// Role before the update.
    pub old_role: Role,

    /// Role after the update.
    pub new_role: Role,

    /// Status before the update.
    pub old_status: PlayerStatus,

    /// Status after the update.
    pub new_status: PlayerStatus,

    /// When the update occurred.
    pub updated_at: Timestamp,
}

domain_event!(
    PlayerUpdated,
    event_type = "group.player_updated",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = updated_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MasterChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published when the Master role passes to another player.
///
/// The promotion and the demotion of the previous Master happen in the
/// same transition and are described by this single event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterChanged {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the group.
    pub group_id: GroupId,

    /// Previous Master, demoted to Admin (None when the group had no
    /// Master, e.g. after the sole Master left).
    pub previous_master_id: Option<UserId>,

    /// Newly appointed Master.
    pub new_master_id: UserId,

    /// Player who performed the succession.
    pub changed_by: UserId,

    /// When the succession occurred.
    pub changed_at: Timestamp,
}

domain_event!(
    MasterChanged,
    event_type = "group.master_changed",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = changed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerRemoved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a player is removed from the group.
///
/// The record is kept with status `Removed`; removal is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRemoved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the group.
    pub group_id: GroupId,

    /// Group name, carried for notification handlers.
    pub group_name: String,

    /// Player who was removed.
    pub user_id: UserId,

    /// Player who performed the removal.
    pub removed_by: UserId,

    /// When the removal occurred.
    pub removed_at: Timestamp,
}

domain_event!(
    PlayerRemoved,
    event_type = "group.player_removed",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = removed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserLeft
// ════════════════════════════════════════════════════════════════════════════

/// Published when a player leaves the group voluntarily.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLeft {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the group.
    pub group_id: GroupId,

    /// Group name, carried for notification handlers.
    pub group_name: String,

    /// Player who left.
    pub user_id: UserId,

    /// When the player left.
    pub left_at: Timestamp,
}

domain_event!(
    UserLeft,
    event_type = "group.user_left",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = left_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// InviteLevelChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published when the minimum role required to invite is reconfigured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteLevelChanged {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the group.
    pub group_id: GroupId,

    /// Master who changed the setting.
    pub changed_by: UserId,

    /// New minimum inviting role.
    pub new_level: Role,

    /// When the change occurred.
    pub changed_at: Timestamp,
}

domain_event!(
    InviteLevelChanged,
    event_type = "group.invite_level_changed",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = changed_at,
    event_id = event_id
);
