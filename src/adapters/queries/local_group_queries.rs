//! LocalGroupQueries - In-process implementation of the cross-module
//! read contract.
//!
//! When the modules run in separate processes this adapter is replaced
//! by an RPC client; the contract stays the same. "Not found" collapses
//! to `false`/empty on purpose, and callers treat any returned error as
//! deny.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, GroupId, UserId};
use crate::ports::{GroupQueries, GroupRepository};

/// Answers Group read queries straight from the Group repository.
pub struct LocalGroupQueries {
    group_repo: Arc<dyn GroupRepository>,
}

impl LocalGroupQueries {
    /// Creates a new adapter over the Group repository.
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { group_repo }
    }
}

#[async_trait]
impl GroupQueries for LocalGroupQueries {
    async fn is_player_active(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<bool, DomainError> {
        let group = self.group_repo.find_by_id(group_id).await?;
        Ok(group
            .map(|g| g.is_player_active(user_id))
            .unwrap_or(false))
    }

    async fn has_player_admin_role(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<bool, DomainError> {
        let group = self.group_repo.find_by_id(group_id).await?;
        Ok(group.map(|g| g.has_admin_role(user_id)).unwrap_or(false))
    }

    async fn find_players_by_group(
        &self,
        group_id: &GroupId,
    ) -> Result<Vec<UserId>, DomainError> {
        let group = self.group_repo.find_by_id(group_id).await?;
        Ok(group
            .map(|g| {
                g.players()
                    .iter()
                    .filter(|p| p.is_member())
                    .map(|p| p.user_id().clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}
