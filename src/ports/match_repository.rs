//! Match repository port (write side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GroupId, MatchId};
use crate::domain::game::Match;

/// Repository port for Match aggregate persistence.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Save a new match.
    async fn save(&self, game: &Match) -> Result<(), DomainError>;

    /// Update an existing match, rejecting stale versions with `Conflict`.
    async fn update(&self, game: &Match) -> Result<(), DomainError>;

    /// Find a match by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &MatchId) -> Result<Option<Match>, DomainError>;

    /// Find all matches of a group, newest first.
    async fn find_by_group(&self, group_id: &GroupId) -> Result<Vec<Match>, DomainError>;
}
