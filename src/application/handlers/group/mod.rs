//! Group command handlers.
//!
//! Each handler follows the same shape: load the aggregate, invoke the
//! domain method, persist, then publish the staged events. A failed
//! save discards the staged events unpublished; a failed publish after
//! a successful save is reported to the caller while the state change
//! stays durable.

mod create_group;
mod invite_user;
mod leave_group;
mod remove_player;
mod respond_to_invitation;
mod update_player;

pub use create_group::{CreateGroupCommand, CreateGroupHandler, CreateGroupResult};
pub use invite_user::{InviteUserCommand, InviteUserHandler, InviteUserResult};
pub use leave_group::{LeaveGroupCommand, LeaveGroupHandler, LeaveGroupResult};
pub use remove_player::{RemovePlayerCommand, RemovePlayerHandler, RemovePlayerResult};
pub use respond_to_invitation::{
    RespondToInvitationCommand, RespondToInvitationHandler, RespondToInvitationResult,
};
pub use update_player::{UpdatePlayerCommand, UpdatePlayerHandler, UpdatePlayerResult};

pub(crate) use super::stamped;
