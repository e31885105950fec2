//! User aggregate entity.
//!
//! The User module tracks which groups a user belongs to. The group
//! list is mutated only in reaction to Group events, so every mutation
//! is idempotent under redelivery.

use crate::domain::foundation::{
    AggregateRoot, EventEnvelope, EventQueue, GroupId, Timestamp, UserId, ValidationError,
};

use super::{Email, Password};

/// User aggregate - account identity plus group memberships.
#[derive(Debug, Clone)]
pub struct User {
    /// Identifier from the auth provider.
    id: UserId,

    /// Validated email address.
    email: Email,

    /// Policy-validated password (hashing happens in the auth adapter).
    password: Password,

    /// Groups the user currently belongs to, insertion-ordered.
    groups: Vec<GroupId>,

    /// Optimistic-concurrency version.
    version: u64,

    /// When the account was created.
    created_at: Timestamp,

    /// When the account was last updated.
    updated_at: Timestamp,

    /// Events staged since the aggregate was loaded.
    events: EventQueue,
}

impl User {
    /// Create a new user account.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from the raw email and password.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = Email::new(email)?;
        let password = Password::new(password)?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            email,
            password,
            groups: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
            events: EventQueue::new(),
        })
    }

    /// Reconstitute a user from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        email: Email,
        password: Password,
        groups: Vec<GroupId>,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            password,
            groups,
            version,
            created_at,
            updated_at,
            events: EventQueue::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the user ID.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the password value object.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the groups the user belongs to.
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// Whether the user belongs to the given group.
    pub fn is_in_group(&self, group_id: &GroupId) -> bool {
        self.groups.contains(group_id)
    }

    /// Returns when the account was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the account was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (reactive, idempotent)
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a group membership. Returns false when already present.
    pub fn add_group(&mut self, group_id: GroupId) -> bool {
        if self.groups.contains(&group_id) {
            return false;
        }
        self.groups.push(group_id);
        self.touch();
        true
    }

    /// Remove a group membership. Returns false when not present.
    pub fn remove_group(&mut self, group_id: &GroupId) -> bool {
        let Some(position) = self.groups.iter().position(|id| id == group_id) else {
            return false;
        };
        self.groups.remove(position);
        self.touch();
        true
    }

    /// Change the email address.
    pub fn change_email(&mut self, email: Email) {
        if self.email == email {
            return;
        }
        self.email = email;
        self.touch();
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }
}

impl AggregateRoot for User {
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
