//! Match-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MatchId, UserId, ValidationError};

/// Closed set of Match command failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Match was not found.
    NotFound(MatchId),
    /// Scheduling a match requires an Admin or Master of the group.
    NotGroupAdmin(UserId),
    /// Only active players of the group may register.
    PlayerNotActiveInGroup(UserId),
    /// The player is already registered.
    AlreadyRegistered(UserId),
    /// The match has reached its player limit.
    MatchFull,
    /// The match was cancelled.
    Cancelled,
    /// Validation of an input value failed.
    Validation(ValidationError),
    /// Concurrent modification detected on save.
    Conflict,
    /// Infrastructure error.
    Infrastructure(String),
}

impl MatchError {
    pub fn not_found(id: MatchId) -> Self {
        MatchError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MatchError::Infrastructure(message.into())
    }

    /// Stable error code for the transport layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::NotFound(_) => ErrorCode::MatchNotFound,
            MatchError::NotGroupAdmin(_) => ErrorCode::Forbidden,
            MatchError::PlayerNotActiveInGroup(_) => ErrorCode::Forbidden,
            MatchError::AlreadyRegistered(_) => ErrorCode::AlreadyRegistered,
            MatchError::MatchFull => ErrorCode::MatchFull,
            MatchError::Cancelled => ErrorCode::MatchCancelled,
            MatchError::Validation(_) => ErrorCode::ValidationFailed,
            MatchError::Conflict => ErrorCode::Conflict,
            MatchError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Human-readable message; never leaks internal aggregate state.
    pub fn message(&self) -> String {
        match self {
            MatchError::NotFound(id) => format!("Match not found: {}", id),
            MatchError::NotGroupAdmin(user) => {
                format!("User '{}' may not schedule matches for this group", user)
            }
            MatchError::PlayerNotActiveInGroup(user) => {
                format!("User '{}' is not an active player of this group", user)
            }
            MatchError::AlreadyRegistered(user) => {
                format!("User '{}' is already registered", user)
            }
            MatchError::MatchFull => "The match is full".to_string(),
            MatchError::Cancelled => "The match was cancelled".to_string(),
            MatchError::Validation(err) => err.to_string(),
            MatchError::Conflict => "The match was modified concurrently".to_string(),
            MatchError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MatchError {}

impl From<ValidationError> for MatchError {
    fn from(err: ValidationError) -> Self {
        MatchError::Validation(err)
    }
}

impl From<DomainError> for MatchError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => MatchError::Conflict,
            _ => MatchError::Infrastructure(err.to_string()),
        }
    }
}
