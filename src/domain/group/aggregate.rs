//! Group aggregate entity.
//!
//! A group owns its roster of players, the set of pending invitations,
//! and the rules governing who may change whose role or status. All
//! operations validate in full before mutating, so a rejected command
//! leaves the aggregate untouched, and each successful operation stages
//! at most one domain event.
//!
//! # Invariants
//!
//! - at most one roster entry per user id
//! - exactly one Master while any member remains (promotion demotes the
//!   prior Master to Admin in the same transition)
//! - an invited user id never coexists with an Active/Inactive player
//!   entry for the same user
//! - a Master's status is always Active

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AggregateRoot, DomainEvent, EventEnvelope, EventId, EventQueue, GroupId, PlayerStatus, Role,
    Timestamp, UserId,
};

use super::{
    GroupCreated, GroupError, GroupName, InvitationAccepted, InviteLevelChanged, MasterChanged,
    PlayerRemoved, PlayerUpdated, UserInvited, UserLeft,
};

/// A player's entry in the group roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    user_id: UserId,
    role: Role,
    status: PlayerStatus,
    joined_at: Timestamp,
}

impl Player {
    /// Creates a roster entry.
    pub fn new(user_id: UserId, role: Role, status: PlayerStatus, joined_at: Timestamp) -> Self {
        Self {
            user_id,
            role,
            status,
            joined_at,
        }
    }

    /// Returns the player's user id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the player's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the player's status.
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns when the player joined.
    pub fn joined_at(&self) -> &Timestamp {
        &self.joined_at
    }

    /// Whether the entry still counts as a member (Active or Inactive).
    pub fn is_member(&self) -> bool {
        self.status.is_member()
    }
}

/// Group aggregate - the consistency boundary for roster and invitations.
#[derive(Debug, Clone)]
pub struct Group {
    /// Unique identifier for this group.
    id: GroupId,

    /// Validated group name.
    name: GroupName,

    /// Roster, one entry per user id, insertion-ordered.
    players: Vec<Player>,

    /// Pending invitations, insertion-ordered, no duplicates.
    invited_user_ids: Vec<UserId>,

    /// Minimum role required to invite users.
    invite_level: Role,

    /// Optimistic-concurrency version; 1 at creation, +1 per mutation.
    version: u64,

    /// When the group was created.
    created_at: Timestamp,

    /// When the group was last updated.
    updated_at: Timestamp,

    /// Events staged since the aggregate was loaded.
    events: EventQueue,
}

impl Group {
    /// Create a new group; the creator becomes its Master.
    ///
    /// Stages a single `group.created` event.
    pub fn create(id: GroupId, creator_id: UserId, name: GroupName) -> Self {
        let now = Timestamp::now();
        let mut group = Self {
            id,
            name,
            players: vec![Player::new(
                creator_id.clone(),
                Role::Master,
                PlayerStatus::Active,
                now,
            )],
            invited_user_ids: Vec::new(),
            invite_level: Role::Admin,
            version: 1,
            created_at: now,
            updated_at: now,
            events: EventQueue::new(),
        };

        let event = GroupCreated {
            event_id: EventId::new(),
            group_id: group.id,
            name: group.name.as_str().to_string(),
            creator_id,
            created_at: now,
        };
        group.record(&event);
        group
    }

    /// Reconstitute a group from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: GroupId,
        name: GroupName,
        players: Vec<Player>,
        invited_user_ids: Vec<UserId>,
        invite_level: Role,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            players,
            invited_user_ids,
            invite_level,
            version,
            created_at,
            updated_at,
            events: EventQueue::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the group ID.
    pub fn id(&self) -> &GroupId {
        &self.id
    }

    /// Returns the group name.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Returns the full roster, terminal entries included.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the pending invitations.
    pub fn invited_user_ids(&self) -> &[UserId] {
        &self.invited_user_ids
    }

    /// Returns the minimum role required to invite.
    pub fn invite_level(&self) -> Role {
        self.invite_level
    }

    /// Returns when the group was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the group was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the roster entry for a user regardless of status.
    pub fn player_record(&self, user_id: &UserId) -> Option<&Player> {
        self.players.iter().find(|p| &p.user_id == user_id)
    }

    /// Returns the roster entry for a user if they are still a member.
    pub fn member(&self, user_id: &UserId) -> Option<&Player> {
        self.player_record(user_id).filter(|p| p.is_member())
    }

    /// Returns the current Master, if the group has one.
    pub fn master(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.role == Role::Master && p.is_member())
    }

    /// Whether the user is an Active player in this group.
    pub fn is_player_active(&self, user_id: &UserId) -> bool {
        self.player_record(user_id)
            .map(|p| p.status == PlayerStatus::Active)
            .unwrap_or(false)
    }

    /// Whether the user holds Admin or Master in this group.
    pub fn has_admin_role(&self, user_id: &UserId) -> bool {
        self.member(user_id)
            .map(|p| p.role >= Role::Admin)
            .unwrap_or(false)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Invitation workflow
    // ─────────────────────────────────────────────────────────────────────────

    /// Invite a user to the group.
    ///
    /// The inviting user must be a member whose role is at least the
    /// group's invite level. Stages one `group.user_invited` event.
    ///
    /// # Errors
    ///
    /// - `PlayerNotInGroup` if the inviting user is not a member
    /// - `InsufficientInviteRole` if their role is below the invite level
    /// - `AlreadyInvited` if the user has a pending invitation
    /// - `AlreadyMember` if the user is an Active/Inactive player
    pub fn invite_user(
        &mut self,
        invited_id: UserId,
        inviting_id: &UserId,
    ) -> Result<(), GroupError> {
        let inviting = self
            .member(inviting_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(inviting_id.clone()))?;
        if inviting.role < self.invite_level {
            return Err(GroupError::InsufficientInviteRole);
        }
        if self.invited_user_ids.contains(&invited_id) {
            return Err(GroupError::AlreadyInvited(invited_id));
        }
        if self.member(&invited_id).is_some() {
            return Err(GroupError::AlreadyMember(invited_id));
        }

        self.invited_user_ids.push(invited_id.clone());
        self.touch();

        let event = UserInvited {
            event_id: EventId::new(),
            group_id: self.id,
            group_name: self.name.as_str().to_string(),
            invited_id,
            inviting_id: inviting_id.clone(),
            invited_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    /// Consume a pending invitation.
    ///
    /// On accept the user joins (or rejoins) as a Member with Active
    /// status and one `group.invitation_accepted` event is staged. On
    /// decline the invitation is removed and no event is staged.
    ///
    /// # Errors
    ///
    /// - `InvitationNotFound` if no pending invitation exists; nothing
    ///   is mutated in that case
    pub fn handle_invited_user_response(
        &mut self,
        user_id: &UserId,
        accept: bool,
    ) -> Result<(), GroupError> {
        let position = self
            .invited_user_ids
            .iter()
            .position(|id| id == user_id)
            .ok_or_else(|| GroupError::InvitationNotFound(user_id.clone()))?;

        self.invited_user_ids.remove(position);

        if !accept {
            self.touch();
            return Ok(());
        }

        let now = Timestamp::now();
        match self.players.iter_mut().find(|p| &p.user_id == user_id) {
            // Previously Leaved/Removed player rejoining
            Some(player) => {
                player.role = Role::Member;
                player.status = PlayerStatus::Active;
            }
            None => {
                self.players
                    .push(Player::new(user_id.clone(), Role::Member, PlayerStatus::Active, now));
            }
        }
        self.touch();

        let event = InvitationAccepted {
            event_id: EventId::new(),
            group_id: self.id,
            user_id: user_id.clone(),
            accepted_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Role/status state machine
    // ─────────────────────────────────────────────────────────────────────────

    /// Update a player's role and status.
    ///
    /// Validates the full precedence-ordered rule table before mutating.
    /// Stages one `group.player_updated` event, or one
    /// `group.master_changed` event for Master succession, or nothing
    /// when the update changes nothing.
    pub fn update_player(
        &mut self,
        acting_id: &UserId,
        target_id: &UserId,
        new_role: Role,
        new_status: PlayerStatus,
    ) -> Result<(), GroupError> {
        self.authorize_update(acting_id, target_id, new_role, new_status)?;

        let target = self
            .member(target_id)
            .expect("authorize_update verified target membership");
        let old_role = target.role;
        let old_status = target.status;

        if old_role == new_role && old_status == new_status {
            return Ok(());
        }

        if new_role == Role::Master && old_role != Role::Master {
            return self.succeed_master(acting_id, target_id);
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| &p.user_id == target_id)
            .expect("authorize_update verified target membership");
        player.role = new_role;
        player.status = new_status;
        self.touch();

        let event = PlayerUpdated {
            event_id: EventId::new(),
            group_id: self.id,
            user_id: target_id.clone(),
            updated_by: acting_id.clone(),
            old_role,
            new_role,
            old_status,
            new_status,
            updated_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    /// Update a player's role, preserving their current status.
    ///
    /// Promotion to Master forces Active status per the Master-active
    /// invariant.
    pub fn update_player_role(
        &mut self,
        acting_id: &UserId,
        target_id: &UserId,
        new_role: Role,
    ) -> Result<(), GroupError> {
        let status = match self.member(target_id) {
            Some(target) if new_role != Role::Master => target.status,
            _ => PlayerStatus::Active,
        };
        self.update_player(acting_id, target_id, new_role, status)
    }

    /// Remove a player from the group.
    ///
    /// The acting player must strictly outrank the removed player. The
    /// roster entry is kept with terminal status `Removed`. Stages one
    /// `group.player_removed` event.
    pub fn remove_player(
        &mut self,
        remove_id: &UserId,
        acting_id: &UserId,
    ) -> Result<(), GroupError> {
        let acting = self
            .member(acting_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(acting_id.clone()))?;
        let target = self
            .member(remove_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(remove_id.clone()))?;
        if !acting.role.outranks(&target.role) {
            return Err(GroupError::RemovalRequiresHigherRole);
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| &p.user_id == remove_id)
            .expect("membership verified above");
        player.status = PlayerStatus::Removed;
        self.touch();

        let event = PlayerRemoved {
            event_id: EventId::new(),
            group_id: self.id,
            group_name: self.name.as_str().to_string(),
            user_id: remove_id.clone(),
            removed_by: acting_id.clone(),
            removed_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    /// Leave the group voluntarily.
    ///
    /// The roster entry is kept with terminal status `Leaved`. A Master
    /// may only leave once no other member remains; succession must
    /// happen first. Stages one `group.user_left` event.
    pub fn user_leaves_group(&mut self, user_id: &UserId) -> Result<(), GroupError> {
        let player = self
            .member(user_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(user_id.clone()))?;
        if player.role == Role::Master {
            let others_remain = self
                .players
                .iter()
                .any(|p| &p.user_id != user_id && p.is_member());
            if others_remain {
                return Err(GroupError::MasterCannotLeave);
            }
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| &p.user_id == user_id)
            .expect("membership verified above");
        player.status = PlayerStatus::Leaved;
        self.touch();

        let event = UserLeft {
            event_id: EventId::new(),
            group_id: self.id,
            group_name: self.name.as_str().to_string(),
            user_id: user_id.clone(),
            left_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    /// Change the minimum role required to invite users.
    ///
    /// Master only. Stages one `group.invite_level_changed` event.
    pub fn change_invite_level(
        &mut self,
        acting_id: &UserId,
        new_level: Role,
    ) -> Result<(), GroupError> {
        let acting = self
            .member(acting_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(acting_id.clone()))?;
        if acting.role != Role::Master {
            return Err(GroupError::MasterRequiredForSettings);
        }
        if self.invite_level == new_level {
            return Ok(());
        }

        self.invite_level = new_level;
        self.touch();

        let event = InviteLevelChanged {
            event_id: EventId::new(),
            group_id: self.id,
            changed_by: acting_id.clone(),
            new_level,
            changed_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// The precedence-ordered rule table for player updates.
    ///
    /// Rules are checked top to bottom; the first violated rule decides
    /// the error, so overlapping violations always report the earlier
    /// rule.
    fn authorize_update(
        &self,
        acting_id: &UserId,
        target_id: &UserId,
        new_role: Role,
        new_status: PlayerStatus,
    ) -> Result<(), GroupError> {
        let self_update = acting_id == target_id;

        // Rule 1: no self role-change; self status flips are fine.
        if self_update {
            if let Some(target) = self.member(target_id) {
                if new_role != target.role {
                    return Err(GroupError::SelfRoleChange);
                }
            }
        }

        // Rule 2: both parties must be members of this group.
        let acting = self
            .member(acting_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(acting_id.clone()))?;
        let target = self
            .member(target_id)
            .ok_or_else(|| GroupError::PlayerNotInGroup(target_id.clone()))?;

        if !self_update {
            // Rule 3: members update nobody.
            if acting.role == Role::Member {
                return Err(GroupError::MemberCannotUpdate);
            }
            // Rule 4: only the Master appoints a Master.
            if new_role == Role::Master && acting.role != Role::Master {
                return Err(GroupError::MasterRequiredForPromotion);
            }
        }

        // Rule 5: a Master's status is forced Active unless the role
        // simultaneously changes away from Master.
        if new_role == Role::Master && new_status != PlayerStatus::Active {
            return Err(GroupError::MasterMustStayActive);
        }

        if !self_update {
            // Rule 6: demoting an Admin or the Master takes the Master.
            let demotion = new_role < target.role;
            if demotion && target.role >= Role::Admin && acting.role != Role::Master {
                return Err(GroupError::MasterRequiredForDemotion);
            }
        }

        // Rule 7: the new status must be assignable.
        if !new_status.is_assignable() {
            return Err(GroupError::StatusNotAssignable(new_status));
        }

        Ok(())
    }

    /// Master succession: promote the target, demote the prior Master to
    /// Admin, stage exactly one event carrying both ids.
    fn succeed_master(
        &mut self,
        acting_id: &UserId,
        target_id: &UserId,
    ) -> Result<(), GroupError> {
        let previous_master_id = self.master().map(|p| p.user_id.clone());

        if let Some(previous_id) = &previous_master_id {
            let previous = self
                .players
                .iter_mut()
                .find(|p| &p.user_id == previous_id)
                .expect("master() returned a roster entry");
            previous.role = Role::Admin;
        }

        let target = self
            .players
            .iter_mut()
            .find(|p| &p.user_id == target_id)
            .expect("authorize_update verified target membership");
        target.role = Role::Master;
        target.status = PlayerStatus::Active;
        self.touch();

        let event = MasterChanged {
            event_id: EventId::new(),
            group_id: self.id,
            previous_master_id,
            new_master_id: target_id.clone(),
            changed_by: acting_id.clone(),
            changed_at: self.updated_at,
        };
        self.record(&event);
        Ok(())
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

impl AggregateRoot for Group {
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

    fn name(s: &str) -> GroupName {
        GroupName::new(s).unwrap()
    }

    fn new_group() -> Group {
        Group::create(GroupId::new(), user("u1"), name("Kickers"))
    }

    /// Roster builder for rule-table tests: u1 gets `acting`, u2 gets
    /// `target`, plus a Master "boss" unless one of them is the Master.
    fn group_with(
        acting: (Role, PlayerStatus),
        target: (Role, PlayerStatus),
    ) -> Group {
        let now = Timestamp::now();
        let mut players = vec![
            Player::new(user("u1"), acting.0, acting.1, now),
            Player::new(user("u2"), target.0, target.1, now),
        ];
        if acting.0 != Role::Master && target.0 != Role::Master {
            players.push(Player::new(user("boss"), Role::Master, PlayerStatus::Active, now));
        }
        Group::reconstitute(
            GroupId::new(),
            name("Kickers"),
            players,
            Vec::new(),
            Role::Admin,
            1,
            now,
            now,
        )
    }

    // ─────────────────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn create_makes_creator_the_active_master() {
        let group = new_group();

        assert_eq!(group.players().len(), 1);
        let creator = &group.players()[0];
        assert_eq!(creator.user_id(), &user("u1"));
        assert_eq!(creator.role(), Role::Master);
        assert_eq!(creator.status(), PlayerStatus::Active);
    }

    #[test]
    fn create_stages_exactly_one_event_referencing_creator() {
        let group = new_group();

        let pending = group.pending_events();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].event_type, "group.created");
        assert_eq!(pending[0].aggregate_id, group.id().to_string());

        let payload: GroupCreated = pending[0].payload_as().unwrap();
        assert_eq!(payload.creator_id, user("u1"));
        assert_eq!(payload.name, "Kickers");
    }

    #[test]
    fn create_starts_at_version_one_with_admin_invite_level() {
        let group = new_group();
        assert_eq!(group.version(), 1);
        assert_eq!(group.invite_level(), Role::Admin);
        assert!(group.invited_user_ids().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Invitation workflow
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn master_can_invite() {
        let mut group = new_group();
        group.invite_user(user("u2"), &user("u1")).unwrap();

        assert_eq!(group.invited_user_ids(), &[user("u2")]);
        assert_eq!(group.pending_events().len(), 2);
        assert_eq!(group.pending_events()[1].event_type, "group.user_invited");
    }

    #[test]
    fn member_below_invite_level_cannot_invite() {
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result = group.invite_user(user("u9"), &user("u1"));
        assert_eq!(result, Err(GroupError::InsufficientInviteRole));
        assert!(group.invited_user_ids().is_empty());
    }

    #[test]
    fn lowering_invite_level_lets_members_invite() {
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        group.change_invite_level(&user("boss"), Role::Member).unwrap();
        assert!(group.invite_user(user("u9"), &user("u1")).is_ok());
    }

    #[test]
    fn invite_level_change_requires_master() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result = group.change_invite_level(&user("u1"), Role::Member);
        assert_eq!(result, Err(GroupError::MasterRequiredForSettings));
    }

    #[test]
    fn inviting_twice_fails() {
        let mut group = new_group();
        group.invite_user(user("u2"), &user("u1")).unwrap();

        let result = group.invite_user(user("u2"), &user("u1"));
        assert_eq!(result, Err(GroupError::AlreadyInvited(user("u2"))));
        assert_eq!(group.invited_user_ids().len(), 1);
    }

    #[test]
    fn inviting_an_existing_member_fails() {
        let mut group = new_group();
        let result = group.invite_user(user("u1"), &user("u1"));
        assert_eq!(result, Err(GroupError::AlreadyMember(user("u1"))));
    }

    #[test]
    fn outsider_cannot_invite() {
        let mut group = new_group();
        let result = group.invite_user(user("u3"), &user("stranger"));
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("stranger"))));
    }

    #[test]
    fn accepting_invitation_joins_as_active_member() {
        let mut group = new_group();
        group.invite_user(user("u2"), &user("u1")).unwrap();
        group.handle_invited_user_response(&user("u2"), true).unwrap();

        assert!(group.invited_user_ids().is_empty());
        assert_eq!(group.players().len(), 2);
        let joined = group.player_record(&user("u2")).unwrap();
        assert_eq!(joined.role(), Role::Member);
        assert_eq!(joined.status(), PlayerStatus::Active);

        assert_eq!(group.pending_events().len(), 3);
        let accepted = &group.pending_events()[2];
        assert_eq!(accepted.event_type, "group.invitation_accepted");
        assert_eq!(accepted.aggregate_id, group.id().to_string());
        let payload: InvitationAccepted = accepted.payload_as().unwrap();
        assert_eq!(payload.user_id, user("u2"));
    }

    #[test]
    fn declining_invitation_consumes_it_without_event() {
        let mut group = new_group();
        group.invite_user(user("u2"), &user("u1")).unwrap();
        let events_before = group.pending_events().len();

        group.handle_invited_user_response(&user("u2"), false).unwrap();

        assert!(group.invited_user_ids().is_empty());
        assert_eq!(group.players().len(), 1);
        assert_eq!(group.pending_events().len(), events_before);
    }

    #[test]
    fn responding_without_invitation_fails_without_mutation() {
        let mut group = new_group();
        let version_before = group.version();

        let result = group.handle_invited_user_response(&user("u9"), false);

        assert_eq!(result, Err(GroupError::InvitationNotFound(user("u9"))));
        assert_eq!(group.version(), version_before);
        assert!(group.invited_user_ids().is_empty());
        assert_eq!(group.players().len(), 1);
    }

    #[test]
    fn leaved_player_can_be_reinvited_and_rejoins_as_member() {
        let mut group = new_group();
        group.invite_user(user("u2"), &user("u1")).unwrap();
        group.handle_invited_user_response(&user("u2"), true).unwrap();
        group.update_player_role(&user("u1"), &user("u2"), Role::Admin).unwrap();
        group.user_leaves_group(&user("u2")).unwrap();

        group.invite_user(user("u2"), &user("u1")).unwrap();
        group.handle_invited_user_response(&user("u2"), true).unwrap();

        // Still one roster entry, reactivated as a plain member
        assert_eq!(group.players().len(), 2);
        let rejoined = group.player_record(&user("u2")).unwrap();
        assert_eq!(rejoined.role(), Role::Member);
        assert_eq!(rejoined.status(), PlayerStatus::Active);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rule table, each rule in isolation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn rule1_self_role_change_rejected() {
        // Scenario B: the Master demoting themselves to Member
        let mut group = new_group();
        let result =
            group.update_player(&user("u1"), &user("u1"), Role::Member, PlayerStatus::Active);

        assert_eq!(result, Err(GroupError::SelfRoleChange));
        assert_eq!(group.player_record(&user("u1")).unwrap().role(), Role::Master);
        assert_eq!(group.pending_events().len(), 1); // only group.created
    }

    #[test]
    fn rule1_self_status_flip_allowed() {
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        group
            .update_player(&user("u1"), &user("u1"), Role::Member, PlayerStatus::Inactive)
            .unwrap();
        assert_eq!(
            group.player_record(&user("u1")).unwrap().status(),
            PlayerStatus::Inactive
        );
    }

    #[test]
    fn rule2_acting_user_must_be_in_group() {
        let mut group = new_group();
        let result =
            group.update_player(&user("ghost"), &user("u1"), Role::Master, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("ghost"))));
    }

    #[test]
    fn rule2_target_user_must_be_in_group() {
        let mut group = new_group();
        let result =
            group.update_player(&user("u1"), &user("ghost"), Role::Admin, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("ghost"))));
    }

    #[test]
    fn rule2_terminal_players_count_as_absent() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Leaved),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Admin, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("u2"))));
    }

    #[test]
    fn rule3_member_cannot_update_others() {
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Member, PlayerStatus::Inactive);
        assert_eq!(result, Err(GroupError::MemberCannotUpdate));
    }

    #[test]
    fn rule4_admin_cannot_appoint_master() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Master, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::MasterRequiredForPromotion));
    }

    #[test]
    fn rule5_master_cannot_be_deactivated_while_master() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        // u1 is Master; try to set own status Inactive while keeping the role
        let result =
            group.update_player(&user("u1"), &user("u1"), Role::Master, PlayerStatus::Inactive);
        assert_eq!(result, Err(GroupError::MasterMustStayActive));
    }

    #[test]
    fn rule5_deactivation_allowed_when_role_changes_away_from_master() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        // Master demotes the Admin... no: Master u1 demotes themselves is
        // rule 1. Instead the Master moves another Master-elect aside:
        // promote u2, then the new Master demotes u1 to Member/Inactive.
        group
            .update_player(&user("u1"), &user("u2"), Role::Master, PlayerStatus::Active)
            .unwrap();
        group
            .update_player(&user("u2"), &user("u1"), Role::Member, PlayerStatus::Inactive)
            .unwrap();

        let u1 = group.player_record(&user("u1")).unwrap();
        assert_eq!(u1.role(), Role::Member);
        assert_eq!(u1.status(), PlayerStatus::Inactive);
    }

    #[test]
    fn rule6_admin_cannot_demote_peer_admin() {
        // Scenario C: u2 (Admin) demotes u3 (Admin) -> rejected
        let now = Timestamp::now();
        let mut group = Group::reconstitute(
            GroupId::new(),
            name("Kickers"),
            vec![
                Player::new(user("u1"), Role::Master, PlayerStatus::Active, now),
                Player::new(user("u2"), Role::Admin, PlayerStatus::Active, now),
                Player::new(user("u3"), Role::Admin, PlayerStatus::Active, now),
            ],
            Vec::new(),
            Role::Admin,
            1,
            now,
            now,
        );

        let result =
            group.update_player(&user("u2"), &user("u3"), Role::Member, PlayerStatus::Active);

        assert_eq!(result, Err(GroupError::MasterRequiredForDemotion));
        assert_eq!(group.player_record(&user("u3")).unwrap().role(), Role::Admin);
        assert!(group.pending_events().is_empty());
    }

    #[test]
    fn rule6_master_can_demote_admin() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        group
            .update_player(&user("u1"), &user("u2"), Role::Member, PlayerStatus::Active)
            .unwrap();
        assert_eq!(group.player_record(&user("u2")).unwrap().role(), Role::Member);
    }

    #[test]
    fn rule7_leaved_status_cannot_be_assigned() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Member, PlayerStatus::Leaved);
        assert_eq!(
            result,
            Err(GroupError::StatusNotAssignable(PlayerStatus::Leaved))
        );
    }

    #[test]
    fn rule7_not_found_status_cannot_be_assigned() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Member, PlayerStatus::NotFound);
        assert_eq!(
            result,
            Err(GroupError::StatusNotAssignable(PlayerStatus::NotFound))
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rule precedence on overlaps
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn self_role_change_wins_over_member_restriction() {
        // A Member changing their own role violates rules 1 and 3; rule 1
        // is reported.
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u1"), Role::Admin, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::SelfRoleChange));
    }

    #[test]
    fn self_status_permission_wins_over_member_restriction() {
        // Rule 1 allows self status flips even for plain Members, despite
        // rule 3 barring Members from updates.
        let mut group = group_with(
            (Role::Member, PlayerStatus::Inactive),
            (Role::Member, PlayerStatus::Active),
        );
        assert!(group
            .update_player(&user("u1"), &user("u1"), Role::Member, PlayerStatus::Active)
            .is_ok());
    }

    #[test]
    fn missing_player_wins_over_member_restriction() {
        // Acting Member + absent target violates rules 2 and 3; rule 2 is
        // reported.
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("ghost"), Role::Member, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("ghost"))));
    }

    #[test]
    fn member_restriction_wins_over_promotion_restriction() {
        // A Member appointing a Master violates rules 3 and 4; rule 3 is
        // reported.
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Master, PlayerStatus::Active);
        assert_eq!(result, Err(GroupError::MemberCannotUpdate));
    }

    #[test]
    fn promotion_restriction_wins_over_master_active_invariant() {
        // Admin promoting to Master with Inactive status violates rules 4
        // and 5; rule 4 is reported.
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Master, PlayerStatus::Inactive);
        assert_eq!(result, Err(GroupError::MasterRequiredForPromotion));
    }

    #[test]
    fn master_active_invariant_wins_over_status_legality() {
        // Master promotion with a non-assignable status violates rules 5
        // and 7; rule 5 is reported.
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result =
            group.update_player(&user("u1"), &user("u2"), Role::Master, PlayerStatus::Removed);
        assert_eq!(result, Err(GroupError::MasterMustStayActive));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Master succession
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn succession_is_atomic_and_stages_one_event() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        let events_before = group.pending_events().len();

        group
            .update_player(&user("u1"), &user("u2"), Role::Master, PlayerStatus::Active)
            .unwrap();

        // Exactly one Master afterwards: the target
        let masters: Vec<_> = group
            .players()
            .iter()
            .filter(|p| p.role() == Role::Master && p.is_member())
            .collect();
        assert_eq!(masters.len(), 1);
        assert_eq!(masters[0].user_id(), &user("u2"));

        // Prior Master demoted to Admin
        assert_eq!(group.player_record(&user("u1")).unwrap().role(), Role::Admin);

        // One succession event, not two updates
        let staged = &group.pending_events()[events_before..];
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].event_type, "group.master_changed");

        let payload: MasterChanged = staged[0].payload_as().unwrap();
        assert_eq!(payload.previous_master_id, Some(user("u1")));
        assert_eq!(payload.new_master_id, user("u2"));
    }

    #[test]
    fn promotion_of_member_via_role_update_forces_active() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Inactive),
        );
        group.update_player_role(&user("u1"), &user("u2"), Role::Master).unwrap();

        let new_master = group.player_record(&user("u2")).unwrap();
        assert_eq!(new_master.role(), Role::Master);
        assert_eq!(new_master.status(), PlayerStatus::Active);
    }

    #[test]
    fn no_op_update_stages_no_event() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        let events_before = group.pending_events().len();
        let version_before = group.version();

        group
            .update_player(&user("u1"), &user("u2"), Role::Admin, PlayerStatus::Active)
            .unwrap();

        assert_eq!(group.pending_events().len(), events_before);
        assert_eq!(group.version(), version_before);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Removal and leaving
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn admin_can_remove_member() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        group.remove_player(&user("u2"), &user("u1")).unwrap();

        let removed = group.player_record(&user("u2")).unwrap();
        assert_eq!(removed.status(), PlayerStatus::Removed);
        assert_eq!(
            group.pending_events().last().unwrap().event_type,
            "group.player_removed"
        );
    }

    #[test]
    fn admin_cannot_remove_peer_admin() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        let result = group.remove_player(&user("u2"), &user("u1"));
        assert_eq!(result, Err(GroupError::RemovalRequiresHigherRole));
    }

    #[test]
    fn nobody_removes_the_master() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Master, PlayerStatus::Active),
        );
        let result = group.remove_player(&user("u2"), &user("u1"));
        assert_eq!(result, Err(GroupError::RemovalRequiresHigherRole));
    }

    #[test]
    fn players_cannot_remove_themselves() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result = group.remove_player(&user("u1"), &user("u1"));
        assert_eq!(result, Err(GroupError::RemovalRequiresHigherRole));
    }

    #[test]
    fn removed_is_terminal_record_is_kept() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        group.remove_player(&user("u2"), &user("u1")).unwrap();

        // Record kept, but no longer a member
        assert!(group.player_record(&user("u2")).is_some());
        assert!(group.member(&user("u2")).is_none());

        // Removing again fails: the target no longer counts as present
        let result = group.remove_player(&user("u2"), &user("u1"));
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("u2"))));
    }

    #[test]
    fn member_can_leave() {
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        group.user_leaves_group(&user("u1")).unwrap();

        assert_eq!(
            group.player_record(&user("u1")).unwrap().status(),
            PlayerStatus::Leaved
        );
        assert_eq!(
            group.pending_events().last().unwrap().event_type,
            "group.user_left"
        );
    }

    #[test]
    fn master_cannot_leave_while_members_remain() {
        let mut group = group_with(
            (Role::Master, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        let result = group.user_leaves_group(&user("u1"));
        assert_eq!(result, Err(GroupError::MasterCannotLeave));
    }

    #[test]
    fn sole_master_can_leave() {
        let mut group = new_group();
        group.user_leaves_group(&user("u1")).unwrap();
        assert_eq!(
            group.player_record(&user("u1")).unwrap().status(),
            PlayerStatus::Leaved
        );
    }

    #[test]
    fn leaving_twice_fails() {
        let mut group = group_with(
            (Role::Member, PlayerStatus::Active),
            (Role::Member, PlayerStatus::Active),
        );
        group.user_leaves_group(&user("u1")).unwrap();
        let result = group.user_leaves_group(&user("u1"));
        assert_eq!(result, Err(GroupError::PlayerNotInGroup(user("u1"))));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scenario A: full invitation round-trip
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn scenario_a_invite_and_accept_round_trip() {
        let mut group = Group::create(GroupId::new(), user("u1"), name("Kickers"));
        let group_id = *group.id();

        group.invite_user(user("u2"), &user("u1")).unwrap();
        assert_eq!(group.invited_user_ids(), &[user("u2")]);
        assert_eq!(group.pending_events().len(), 2);

        group.handle_invited_user_response(&user("u2"), true).unwrap();
        assert!(group.invited_user_ids().is_empty());
        assert_eq!(group.players().len(), 2);

        let u2 = group.player_record(&user("u2")).unwrap();
        assert_eq!(u2.role(), Role::Member);
        assert_eq!(u2.status(), PlayerStatus::Active);

        assert_eq!(group.pending_events().len(), 3);
        let third = &group.pending_events()[2];
        assert_eq!(third.aggregate_id, group_id.to_string());
        let payload: InvitationAccepted = third.payload_as().unwrap();
        assert_eq!(payload.group_id, group_id);
        assert_eq!(payload.user_id, user("u2"));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Versioning and event staging
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn mutations_bump_the_version() {
        let mut group = new_group();
        assert_eq!(group.version(), 1);

        group.invite_user(user("u2"), &user("u1")).unwrap();
        assert_eq!(group.version(), 2);

        group.handle_invited_user_response(&user("u2"), true).unwrap();
        assert_eq!(group.version(), 3);
    }

    #[test]
    fn staged_events_carry_the_post_mutation_version() {
        let mut group = new_group();
        group.invite_user(user("u2"), &user("u1")).unwrap();

        let pending = group.pending_events();
        assert_eq!(pending[0].aggregate_version, 1); // group.created
        assert_eq!(pending[1].aggregate_version, 2); // group.user_invited
    }

    #[test]
    fn take_events_drains_the_queue() {
        let mut group = new_group();
        let drained = group.take_events();
        assert_eq!(drained.len(), 1);
        assert!(group.pending_events().is_empty());
    }

    #[test]
    fn rejected_commands_never_mutate_state() {
        let mut group = group_with(
            (Role::Admin, PlayerStatus::Active),
            (Role::Admin, PlayerStatus::Active),
        );
        let snapshot_version = group.version();

        let _ = group.update_player(&user("u1"), &user("u2"), Role::Member, PlayerStatus::Active);
        let _ = group.remove_player(&user("u2"), &user("u1"));
        let _ = group.handle_invited_user_response(&user("u9"), true);

        assert_eq!(group.version(), snapshot_version);
        assert!(group.pending_events().is_empty());
    }
}

#[cfg(test)]
mod rule_table_properties {
    //! Property sweep: the implementation must agree with an independent
    //! oracle of the precedence table for every input combination.

    use super::*;
    use proptest::prelude::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Outcome {
        Ok,
        SelfRoleChange,
        NotInGroup,
        MemberCannotUpdate,
        MasterRequiredForPromotion,
        MasterMustStayActive,
        MasterRequiredForDemotion,
        StatusNotAssignable,
    }

    /// Independent restatement of the precedence table.
    fn oracle(
        self_update: bool,
        acting: (Role, PlayerStatus),
        target: (Role, PlayerStatus),
        new_role: Role,
        new_status: PlayerStatus,
    ) -> Outcome {
        let acting_member = acting.1.is_member();
        let target_member = target.1.is_member();

        if self_update && target_member && new_role != target.0 {
            return Outcome::SelfRoleChange;
        }
        if !acting_member || !target_member {
            return Outcome::NotInGroup;
        }
        if !self_update && acting.0 == Role::Member {
            return Outcome::MemberCannotUpdate;
        }
        if !self_update && new_role == Role::Master && acting.0 != Role::Master {
            return Outcome::MasterRequiredForPromotion;
        }
        if new_role == Role::Master && new_status != PlayerStatus::Active {
            return Outcome::MasterMustStayActive;
        }
        if !self_update
            && new_role < target.0
            && target.0 >= Role::Admin
            && acting.0 != Role::Master
        {
            return Outcome::MasterRequiredForDemotion;
        }
        if !new_status.is_assignable() {
            return Outcome::StatusNotAssignable;
        }
        Outcome::Ok
    }

    fn outcome_of(result: Result<(), GroupError>) -> Outcome {
        match result {
            Ok(()) => Outcome::Ok,
            Err(GroupError::SelfRoleChange) => Outcome::SelfRoleChange,
            Err(GroupError::PlayerNotInGroup(_)) => Outcome::NotInGroup,
            Err(GroupError::MemberCannotUpdate) => Outcome::MemberCannotUpdate,
            Err(GroupError::MasterRequiredForPromotion) => Outcome::MasterRequiredForPromotion,
            Err(GroupError::MasterMustStayActive) => Outcome::MasterMustStayActive,
            Err(GroupError::MasterRequiredForDemotion) => Outcome::MasterRequiredForDemotion,
            Err(GroupError::StatusNotAssignable(_)) => Outcome::StatusNotAssignable,
            Err(other) => panic!("unexpected error from update_player: {:?}", other),
        }
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop_oneof![Just(Role::Member), Just(Role::Admin), Just(Role::Master)]
    }

    fn status_strategy() -> impl Strategy<Value = PlayerStatus> {
        prop_oneof![
            Just(PlayerStatus::Active),
            Just(PlayerStatus::Inactive),
            Just(PlayerStatus::Leaved),
            Just(PlayerStatus::Removed),
        ]
    }

    fn requested_status_strategy() -> impl Strategy<Value = PlayerStatus> {
        prop_oneof![
            Just(PlayerStatus::Active),
            Just(PlayerStatus::Inactive),
            Just(PlayerStatus::Leaved),
            Just(PlayerStatus::Removed),
            Just(PlayerStatus::NotFound),
        ]
    }

    proptest! {
        #[test]
        fn update_player_matches_the_oracle(
            self_update in any::<bool>(),
            acting_role in role_strategy(),
            acting_status in status_strategy(),
            target_role in role_strategy(),
            target_status in status_strategy(),
            new_role in role_strategy(),
            new_status in requested_status_strategy(),
        ) {
            let now = Timestamp::now();
            let (acting_id, target_id, players) = if self_update {
                (
                    user("u1"),
                    user("u1"),
                    vec![Player::new(user("u1"), target_role, target_status, now)],
                )
            } else {
                (
                    user("u1"),
                    user("u2"),
                    vec![
                        Player::new(user("u1"), acting_role, acting_status, now),
                        Player::new(user("u2"), target_role, target_status, now),
                    ],
                )
            };
            let mut group = Group::reconstitute(
                GroupId::new(),
                GroupName::new("Prop Group").unwrap(),
                players,
                Vec::new(),
                Role::Admin,
                1,
                now,
                now,
            );

            let effective_acting = if self_update {
                (target_role, target_status)
            } else {
                (acting_role, acting_status)
            };
            let expected = oracle(
                self_update,
                effective_acting,
                (target_role, target_status),
                new_role,
                new_status,
            );
            let actual = outcome_of(group.update_player(
                &acting_id,
                &target_id,
                new_role,
                new_status,
            ));

            prop_assert_eq!(actual, expected);

            // Structural invariants hold after every accepted update
            if actual == Outcome::Ok {
                let members_as_master = group
                    .players()
                    .iter()
                    .filter(|p| p.role() == Role::Master && p.is_member())
                    .count();
                prop_assert!(members_as_master <= 1);
                if let Some(master) = group.master() {
                    prop_assert_eq!(master.status(), PlayerStatus::Active);
                }
            }
        }
    }
}
