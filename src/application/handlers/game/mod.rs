//! Match command handlers.
//!
//! Match commands consult the Group module through the cross-module
//! query port before mutating, and the Match aggregate re-validates its
//! own invariants locally; a stale or failed cross-module read can deny
//! a command but never corrupt a match.

mod cancel_match;
mod create_match;
mod join_match;

pub use cancel_match::{CancelMatchCommand, CancelMatchHandler, CancelMatchResult};
pub use create_match::{CreateMatchCommand, CreateMatchHandler, CreateMatchResult};
pub use join_match::{JoinMatchCommand, JoinMatchHandler, JoinMatchResult};

pub(crate) use super::stamped;
