//! Match domain events.
//!
//! - `MatchCreated` - New match scheduled for a group
//! - `PlayerRegistered` - Player signed up for a match
//! - `MatchCancelled` - Match called off

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, GroupId, MatchId, Timestamp, UserId};

/// Published when a match is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the scheduled match.
    pub match_id: MatchId,

    /// Group the match belongs to.
    pub group_id: GroupId,

    /// Where the match takes place.
    pub location: String,

    /// When the match takes place.
    pub scheduled_at: Timestamp,

    /// Maximum number of players.
    pub max_players: u32,

    /// Player who scheduled the match.
    pub created_by: UserId,

    /// When the match was scheduled.
    pub created_at: Timestamp,
}

domain_event!(
    MatchCreated,
    event_type = "match.created",
    aggregate_id = match_id,
    aggregate_type = "Match",
    occurred_at = created_at,
    event_id = event_id
);

/// Published when a player registers for a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRegistered {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the match.
    pub match_id: MatchId,

    /// Group the match belongs to.
    pub group_id: GroupId,

    /// Player who registered.
    pub user_id: UserId,

    /// When the registration happened.
    pub registered_at: Timestamp,
}

domain_event!(
    PlayerRegistered,
    event_type = "match.player_registered",
    aggregate_id = match_id,
    aggregate_type = "Match",
    occurred_at = registered_at,
    event_id = event_id
);

/// Published when a match is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCancelled {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the match.
    pub match_id: MatchId,

    /// Group the match belongs to.
    pub group_id: GroupId,

    /// Player who cancelled the match.
    pub cancelled_by: UserId,

    /// When the cancellation happened.
    pub cancelled_at: Timestamp,
}

domain_event!(
    MatchCancelled,
    event_type = "match.cancelled",
    aggregate_id = match_id,
    aggregate_type = "Match",
    occurred_at = cancelled_at,
    event_id = event_id
);
