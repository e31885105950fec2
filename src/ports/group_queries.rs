//! GroupQueries port - Cross-module read-only contract.
//!
//! Other modules call the Group module synchronously mid-command to
//! answer narrow questions before mutating their own aggregates. In a
//! multi-process deployment this is an RPC client; in-process it is a
//! thin adapter over the Group repository.
//!
//! # Semantics callers must assume
//!
//! - Results may be **stale**: a player removed moments ago can still
//!   read as active until the removal event propagates.
//! - "Not found" collapses to `false` by design; callers cannot
//!   distinguish a missing group from a genuinely inactive player.
//! - Any error is treated as **deny** by command handlers; a failing
//!   lookup never authorizes a mutation.
//! - A cross-module read is never the sole guard for a mutation: the
//!   mutated aggregate re-validates its own invariants locally.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GroupId, UserId};

/// Read-only queries against the Group module.
#[async_trait]
pub trait GroupQueries: Send + Sync {
    /// Whether the user is an Active player of the group.
    ///
    /// Returns `false` for a missing group or missing player.
    async fn is_player_active(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<bool, DomainError>;

    /// Whether the user holds Admin or Master in the group.
    ///
    /// Returns `false` for a missing group or missing player.
    async fn has_player_admin_role(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<bool, DomainError>;

    /// The user ids of all Active/Inactive players of the group.
    ///
    /// Returns an empty list for a missing group.
    async fn find_players_by_group(&self, group_id: &GroupId)
        -> Result<Vec<UserId>, DomainError>;
}
