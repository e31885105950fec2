//! Player repository port (write side).
//!
//! Contract for persisting the Player module's roster records.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GroupId, PlayerId, UserId};
use crate::domain::player::PlayerRecord;

/// Repository port for roster record persistence.
///
/// `update` enforces optimistic concurrency like every write-side
/// repository: stale versions are rejected with `Conflict`.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Save a new roster record.
    async fn save(&self, record: &PlayerRecord) -> Result<(), DomainError>;

    /// Update an existing record, rejecting stale versions.
    async fn update(&self, record: &PlayerRecord) -> Result<(), DomainError>;

    /// Find a record by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, DomainError>;

    /// Find the record for a user within a group, if any.
    async fn find_by_user_and_group(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<Option<PlayerRecord>, DomainError>;

    /// Find all records of a group.
    async fn find_by_group(&self, group_id: &GroupId) -> Result<Vec<PlayerRecord>, DomainError>;
}
