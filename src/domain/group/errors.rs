//! Group-specific error types.
//!
//! One variant per rejection reason so the transport layer can map each
//! to a distinct user-facing message. Never collapsed into a generic
//! failure.

use crate::domain::foundation::{
    DomainError, ErrorCode, GroupId, PlayerStatus, UserId, ValidationError,
};

/// Closed set of Group command failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Group was not found.
    NotFound(GroupId),
    /// A referenced user is not a player in the group.
    PlayerNotInGroup(UserId),
    /// Players may not change their own role.
    SelfRoleChange,
    /// Members may not update other players.
    MemberCannotUpdate,
    /// Only the Master may appoint a new Master.
    MasterRequiredForPromotion,
    /// Demoting an Admin or the Master requires the Master.
    MasterRequiredForDemotion,
    /// A Master's status is always Active while they hold the role.
    MasterMustStayActive,
    /// The requested status cannot be assigned through an update.
    StatusNotAssignable(PlayerStatus),
    /// The user already has a pending invitation.
    AlreadyInvited(UserId),
    /// The user is already an active or inactive player.
    AlreadyMember(UserId),
    /// No pending invitation exists for the user.
    InvitationNotFound(UserId),
    /// The inviting player's role is below the group's invite level.
    InsufficientInviteRole,
    /// Removing a player requires strictly outranking them.
    RemovalRequiresHigherRole,
    /// Changing group settings requires the Master.
    MasterRequiredForSettings,
    /// The Master may not leave while other members remain.
    MasterCannotLeave,
    /// The player's current status does not permit the operation.
    PlayerNotActive(UserId),
    /// Validation of an input value failed.
    Validation(ValidationError),
    /// Concurrent modification detected on save.
    Conflict,
    /// Infrastructure error.
    Infrastructure(String),
}

impl GroupError {
    pub fn not_found(id: GroupId) -> Self {
        GroupError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        GroupError::Infrastructure(message.into())
    }

    /// Stable error code for the transport layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            GroupError::NotFound(_) => ErrorCode::GroupNotFound,
            GroupError::PlayerNotInGroup(_) => ErrorCode::PlayerNotFound,
            GroupError::SelfRoleChange => ErrorCode::SelfRoleChange,
            GroupError::MemberCannotUpdate => ErrorCode::InsufficientRole,
            GroupError::MasterRequiredForPromotion => ErrorCode::MasterRequired,
            GroupError::MasterRequiredForDemotion => ErrorCode::MasterRequired,
            GroupError::MasterMustStayActive => ErrorCode::MasterMustStayActive,
            GroupError::StatusNotAssignable(_) => ErrorCode::InvalidStatus,
            GroupError::AlreadyInvited(_) => ErrorCode::AlreadyInvited,
            GroupError::AlreadyMember(_) => ErrorCode::AlreadyMember,
            GroupError::InvitationNotFound(_) => ErrorCode::InvitationNotFound,
            GroupError::InsufficientInviteRole => ErrorCode::InsufficientRole,
            GroupError::RemovalRequiresHigherRole => ErrorCode::Forbidden,
            GroupError::MasterRequiredForSettings => ErrorCode::MasterRequired,
            GroupError::MasterCannotLeave => ErrorCode::MasterCannotLeave,
            GroupError::PlayerNotActive(_) => ErrorCode::InvalidStateTransition,
            GroupError::Validation(_) => ErrorCode::ValidationFailed,
            GroupError::Conflict => ErrorCode::Conflict,
            GroupError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Human-readable message; never leaks internal aggregate state.
    pub fn message(&self) -> String {
        match self {
            GroupError::NotFound(id) => format!("Group not found: {}", id),
            GroupError::PlayerNotInGroup(user) => {
                format!("User '{}' is not a player in this group", user)
            }
            GroupError::SelfRoleChange => "Players cannot change their own role".to_string(),
            GroupError::MemberCannotUpdate => {
                "Members cannot update other players".to_string()
            }
            GroupError::MasterRequiredForPromotion => {
                "Only the Master can appoint a new Master".to_string()
            }
            GroupError::MasterRequiredForDemotion => {
                "Only the Master can demote an Admin".to_string()
            }
            GroupError::MasterMustStayActive => {
                "The Master's status is always Active".to_string()
            }
            GroupError::StatusNotAssignable(status) => {
                format!("Status '{}' cannot be assigned directly", status)
            }
            GroupError::AlreadyInvited(user) => {
                format!("User '{}' is already invited", user)
            }
            GroupError::AlreadyMember(user) => {
                format!("User '{}' is already a player in this group", user)
            }
            GroupError::InvitationNotFound(user) => {
                format!("No pending invitation for user '{}'", user)
            }
            GroupError::InsufficientInviteRole => {
                "Inviting players requires a higher role in this group".to_string()
            }
            GroupError::RemovalRequiresHigherRole => {
                "Removing a player requires outranking them".to_string()
            }
            GroupError::MasterRequiredForSettings => {
                "Only the Master can change group settings".to_string()
            }
            GroupError::MasterCannotLeave => {
                "The Master must hand over the group before leaving".to_string()
            }
            GroupError::PlayerNotActive(user) => {
                format!("User '{}' is no longer an active player", user)
            }
            GroupError::Validation(err) => err.to_string(),
            GroupError::Conflict => "The group was modified concurrently".to_string(),
            GroupError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for GroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GroupError {}

impl From<ValidationError> for GroupError {
    fn from(err: ValidationError) -> Self {
        GroupError::Validation(err)
    }
}

impl From<DomainError> for GroupError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => GroupError::Conflict,
            _ => GroupError::Infrastructure(err.to_string()),
        }
    }
}
