//! Group repository port (write side).
//!
//! Contract for persisting and retrieving Group aggregates. The
//! document-mapping details live in the adapter.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GroupId, UserId};
use crate::domain::group::Group;

/// Repository port for Group aggregate persistence.
///
/// `update` enforces optimistic concurrency: implementations must
/// reject a save whose version is not exactly one ahead of the stored
/// version with a `Conflict` error.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Save a new group.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a group with the same id already exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, group: &Group) -> Result<(), DomainError>;

    /// Update an existing group, rejecting stale versions.
    ///
    /// # Errors
    ///
    /// - `GroupNotFound` if the group doesn't exist
    /// - `Conflict` if the stored version moved on
    /// - `DatabaseError` on persistence failure
    async fn update(&self, group: &Group) -> Result<(), DomainError>;

    /// Find a group by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    /// Find the groups where the user is an Active or Inactive player.
    async fn find_by_member(&self, user_id: &UserId) -> Result<Vec<Group>, DomainError>;
}
