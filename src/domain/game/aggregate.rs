//! Match aggregate entity.
//!
//! A match is scheduled within a group, collects player registrations
//! up to its player limit, and can be cancelled. Registration rules are
//! enforced locally; whether the registering user is still an active
//! group player is the command handler's cross-module concern.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AggregateRoot, DomainEvent, EventEnvelope, EventId, EventQueue, GroupId, MatchId, Timestamp,
    UserId, ValidationError,
};

use super::{
    validate_max_players, Location, MatchCancelled, MatchCreated, MatchError, PlayerRegistered,
};

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Upcoming match, open for registration.
    Scheduled,

    /// Called off. Terminal.
    Cancelled,
}

/// Match aggregate - a scheduled game within a group.
#[derive(Debug, Clone)]
pub struct Match {
    /// Unique identifier for this match.
    id: MatchId,

    /// Group the match belongs to.
    group_id: GroupId,

    /// Where the match takes place.
    location: Location,

    /// When the match takes place.
    scheduled_at: Timestamp,

    /// Maximum number of players.
    max_players: u32,

    /// Registered players, insertion-ordered, no duplicates.
    registered: Vec<UserId>,

    /// Lifecycle state.
    status: MatchStatus,

    /// Optimistic-concurrency version.
    version: u64,

    /// When the match was scheduled.
    created_at: Timestamp,

    /// When the match was last updated.
    updated_at: Timestamp,

    /// Events staged since the aggregate was loaded.
    events: EventQueue,
}

impl Match {
    /// Schedule a new match.
    ///
    /// Stages one `match.created` event.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `max_players` is outside 2..=50
    pub fn schedule(
        id: MatchId,
        group_id: GroupId,
        location: Location,
        scheduled_at: Timestamp,
        max_players: u32,
        created_by: UserId,
    ) -> Result<Self, ValidationError> {
        let max_players = validate_max_players(max_players)?;
        let now = Timestamp::now();
        let mut game = Self {
            id,
            group_id,
            location,
            scheduled_at,
            max_players,
            registered: Vec::new(),
            status: MatchStatus::Scheduled,
            version: 1,
            created_at: now,
            updated_at: now,
            events: EventQueue::new(),
        };

        let event = MatchCreated {
            event_id: EventId::new(),
            match_id: game.id,
            group_id: game.group_id,
            location: game.location.as_str().to_string(),
            scheduled_at: game.scheduled_at,
            max_players: game.max_players,
            created_by,
            created_at: now,
        };
        game.record(&event);
        Ok(game)
    }

    /// Reconstitute a match from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MatchId,
        group_id: GroupId,
        location: Location,
        scheduled_at: Timestamp,
        max_players: u32,
        registered: Vec<UserId>,
        status: MatchStatus,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            group_id,
            location,
            scheduled_at,
            max_players,
            registered,
            status,
            version,
            created_at,
            updated_at,
            events: EventQueue::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the match ID.
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    /// Returns the owning group's ID.
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    /// Returns the location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns when the match takes place.
    pub fn scheduled_at(&self) -> &Timestamp {
        &self.scheduled_at
    }

    /// Returns the player limit.
    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    /// Returns the registered players.
    pub fn registered(&self) -> &[UserId] {
        &self.registered
    }

    /// Returns the lifecycle state.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Whether the match has reached its player limit.
    pub fn is_full(&self) -> bool {
        self.registered.len() as u32 >= self.max_players
    }

    /// Returns when the match was scheduled.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the match was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a player for the match.
    ///
    /// Stages one `match.player_registered` event.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if the match was called off
    /// - `AlreadyRegistered` if the player is already signed up
    /// - `MatchFull` if the player limit is reached
    pub fn register_player(&mut self, user_id: UserId) -> Result<(), MatchError> {
        if self.status == MatchStatus::Cancelled {
            return Err(MatchError::Cancelled);
        }
        if self.registered.contains(&user_id) {
            return Err(MatchError::AlreadyRegistered(user_id));
        }
        if self.is_full() {
            return Err(MatchError::MatchFull);
        }

        self.registered.push(user_id.clone());
        self.touch();

        let event = PlayerRegistered {
            event_id: EventId::new(),
            match_id: self.id,
            group_id: self.group_id,
            user_id,
            registered_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    /// Cancel the match.
    ///
    /// Stages one `match.cancelled` event.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if the match is already cancelled
    pub fn cancel(&mut self, cancelled_by: UserId) -> Result<(), MatchError> {
        if self.status == MatchStatus::Cancelled {
            return Err(MatchError::Cancelled);
        }

        self.status = MatchStatus::Cancelled;
        self.touch();

        let event = MatchCancelled {
            event_id: EventId::new(),
            match_id: self.id,
            group_id: self.group_id,
            cancelled_by,
            cancelled_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }

    fn record<E>(&mut self, event: &E)
    where
        E: DomainEvent + serde::Serialize,
    {
        let envelope = EventEnvelope::from_event(event).with_aggregate_version(self.version);
        self.events.record(envelope);
    }
}

impl AggregateRoot for Match {
    fn aggregate_id(&self) -> String {
        self.id.to_string()
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn pending_events(&self) -> &[EventEnvelope] {
        self.events.pending()
    }

    fn take_events(&mut self) -> Vec<EventEnvelope> {
        self.events.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn scheduled_match(max_players: u32) -> Match {
        Match::schedule(
            MatchId::new(),
            GroupId::new(),
            Location::new("North Field").unwrap(),
            Timestamp::now().add_days(3),
            max_players,
            user("u1"),
        )
        .unwrap()
    }

    #[test]
    fn schedule_stages_created_event() {
        let game = scheduled_match(10);

        assert_eq!(game.status(), MatchStatus::Scheduled);
        assert_eq!(game.pending_events().len(), 1);
        assert_eq!(game.pending_events()[0].event_type, "match.created");

        let payload: MatchCreated = game.pending_events()[0].payload_as().unwrap();
        assert_eq!(payload.created_by, user("u1"));
        assert_eq!(payload.max_players, 10);
    }

    #[test]
    fn schedule_rejects_invalid_player_count() {
        let result = Match::schedule(
            MatchId::new(),
            GroupId::new(),
            Location::new("North Field").unwrap(),
            Timestamp::now(),
            1,
            user("u1"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn register_adds_player_and_stages_event() {
        let mut game = scheduled_match(10);
        game.register_player(user("u2")).unwrap();

        assert_eq!(game.registered(), &[user("u2")]);
        assert_eq!(
            game.pending_events().last().unwrap().event_type,
            "match.player_registered"
        );
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut game = scheduled_match(10);
        game.register_player(user("u2")).unwrap();

        let result = game.register_player(user("u2"));
        assert_eq!(result, Err(MatchError::AlreadyRegistered(user("u2"))));
        assert_eq!(game.registered().len(), 1);
    }

    #[test]
    fn register_rejects_when_full() {
        let mut game = scheduled_match(2);
        game.register_player(user("u2")).unwrap();
        game.register_player(user("u3")).unwrap();

        let result = game.register_player(user("u4"));
        assert_eq!(result, Err(MatchError::MatchFull));
    }

    #[test]
    fn register_rejects_after_cancellation() {
        let mut game = scheduled_match(10);
        game.cancel(user("u1")).unwrap();

        let result = game.register_player(user("u2"));
        assert_eq!(result, Err(MatchError::Cancelled));
    }

    #[test]
    fn cancel_twice_fails() {
        let mut game = scheduled_match(10);
        game.cancel(user("u1")).unwrap();
        assert_eq!(game.cancel(user("u1")), Err(MatchError::Cancelled));
    }

    #[test]
    fn mutations_bump_version_and_stamp_events() {
        let mut game = scheduled_match(10);
        assert_eq!(game.version(), 1);

        game.register_player(user("u2")).unwrap();
        assert_eq!(game.version(), 2);

        let pending = game.pending_events();
        assert_eq!(pending[0].aggregate_version, 1);
        assert_eq!(pending[1].aggregate_version, 2);
    }
}
