//! Player module roster record.
//!
//! The Player module keeps its own per-(user, group) record of role and
//! status, mutated only in reaction to Group events. All mutations are
//! idempotent so handlers tolerate at-least-once delivery.

use crate::domain::foundation::{
    AggregateRoot, DomainEvent, EventEnvelope, EventId, EventQueue, GroupId, PlayerId,
    PlayerStatus, Role, Timestamp, UserId,
};
use serde::Serialize;

use super::NewMasterAppointed;

/// Roster record aggregate owned by the Player module.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    /// Unique identifier for this record.
    id: PlayerId,

    /// User the record belongs to.
    user_id: UserId,

    /// Group the record belongs to.
    group_id: GroupId,

    /// Mirrored role.
    role: Role,

    /// Mirrored status.
    status: PlayerStatus,

    /// Optimistic-concurrency version.
    version: u64,

    /// When the record was created.
    created_at: Timestamp,

    /// When the record was last updated.
    updated_at: Timestamp,

    /// Events staged since the record was loaded.
    events: EventQueue,
}

impl PlayerRecord {
    /// Create a roster record for a user joining a group.
    ///
    /// Promotion into Master at creation (the group creator) stages a
    /// `player.new_master_appointed` event.
    pub fn create(
        id: PlayerId,
        user_id: UserId,
        group_id: GroupId,
        role: Role,
        status: PlayerStatus,
    ) -> Self {
        let now = Timestamp::now();
        let mut record = Self {
            id,
            user_id,
            group_id,
            role,
            status,
            version: 1,
            created_at: now,
            updated_at: now,
            events: EventQueue::new(),
        };
        if role == Role::Master {
            record.stage_master_appointed();
        }
        record
    }

    /// Reconstitute a record from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PlayerId,
        user_id: UserId,
        group_id: GroupId,
        role: Role,
        status: PlayerStatus,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            group_id,
            role,
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

    /// Returns the record ID.
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Returns the user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the group ID.
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    /// Returns the mirrored role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the mirrored status.
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the record was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (reactive, idempotent)
    // ─────────────────────────────────────────────────────────────────────────

    /// Mirror a role/status change from the Group module.
    ///
    /// A transition into Master stages one `player.new_master_appointed`
    /// event. Applying the same values again is a no-op.
    pub fn sync_role_and_status(&mut self, new_role: Role, new_status: PlayerStatus) {
        if self.role == new_role && self.status == new_status {
            return;
        }
        let became_master = new_role == Role::Master && self.role != Role::Master;
        self.role = new_role;
        self.status = new_status;
        self.touch();
        if became_master {
            self.stage_master_appointed();
        }
    }

    /// Mirror a Master appointment.
    pub fn promote_to_master(&mut self) {
        self.sync_role_and_status(Role::Master, PlayerStatus::Active);
    }

    /// Mirror a demotion of the previous Master.
    pub fn demote_to_admin(&mut self) {
        self.sync_role_and_status(Role::Admin, self.status);
    }

    /// Mirror a removal from the group.
    pub fn mark_removed(&mut self) {
        if self.status == PlayerStatus::Removed {
            return;
        }
        self.status = PlayerStatus::Removed;
        self.touch();
    }

    /// Mirror a voluntary departure.
    pub fn mark_left(&mut self) {
        if self.status == PlayerStatus::Leaved {
            return;
        }
        self.status = PlayerStatus::Leaved;
        self.touch();
    }

    /// Reactivate the record when a former player rejoins as a Member.
    pub fn reactivate_as_member(&mut self) {
        self.sync_role_and_status(Role::Member, PlayerStatus::Active);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn stage_master_appointed(&mut self) {
        let event = NewMasterAppointed {
            event_id: EventId::new(),
            player_id: self.id,
            group_id: self.group_id,
            user_id: self.user_id.clone(),
            appointed_at: self.updated_at,
        };
        self.record(&event);
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }

    fn record<E>(&mut self, event: &E)
    where
        E: DomainEvent + Serialize,
    {
        let envelope = EventEnvelope::from_event(event).with_aggregate_version(self.version);
        self.events.record(envelope);
    }
}

impl AggregateRoot for PlayerRecord {
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
