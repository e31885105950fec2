//! Application layer - Commands and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Write
//! handlers load, mutate, persist, and publish; event handlers keep the
//! other modules consistent.

pub mod handlers;

pub use handlers::game::{
    CancelMatchCommand, CancelMatchHandler, CancelMatchResult, CreateMatchCommand,
    CreateMatchHandler, CreateMatchResult, JoinMatchCommand, JoinMatchHandler, JoinMatchResult,
};
pub use handlers::group::{
    CreateGroupCommand, CreateGroupHandler, CreateGroupResult, InviteUserCommand,
    InviteUserHandler, InviteUserResult, LeaveGroupCommand, LeaveGroupHandler, LeaveGroupResult,
    RemovePlayerCommand, RemovePlayerHandler, RemovePlayerResult, RespondToInvitationCommand,
    RespondToInvitationHandler, RespondToInvitationResult, UpdatePlayerCommand,
    UpdatePlayerHandler, UpdatePlayerResult,
};
pub use handlers::player::{MasterAuditHandler, RosterProjection, ROSTER_EVENT_TYPES};
pub use handlers::user::{
    InvitationNotifier, MatchNotifier, MembershipTracker, MEMBERSHIP_EVENT_TYPES,
};
