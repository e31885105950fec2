//! Player membership lifecycle statuses.

use serde::{Deserialize, Serialize};

/// Membership lifecycle stage of a player within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// Participating member.
    Active,

    /// Temporarily paused (vacation, injury). Still a member.
    Inactive,

    /// Left the group voluntarily. Terminal; record kept.
    Leaved,

    /// Removed by a higher-ranking player. Terminal; record kept.
    Removed,

    /// Query-side sentinel for a missing player. Never stored.
    NotFound,
}

impl PlayerStatus {
    /// Whether this status may be assigned through a player update.
    ///
    /// `Leaved` and `Removed` are set only by the dedicated leave/remove
    /// operations; `NotFound` is never stored.
    pub fn is_assignable(&self) -> bool {
        matches!(self, PlayerStatus::Active | PlayerStatus::Inactive)
    }

    /// Whether the player still counts as a member of the group.
    pub fn is_member(&self) -> bool {
        matches!(self, PlayerStatus::Active | PlayerStatus::Inactive)
    }

    /// Whether this status ends the membership for good.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlayerStatus::Leaved | PlayerStatus::Removed)
    }

    /// Returns the display name for this status.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "Active",
            PlayerStatus::Inactive => "Inactive",
            PlayerStatus::Leaved => "Leaved",
            PlayerStatus::Removed => "Removed",
            PlayerStatus::NotFound => "NotFound",
        }
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
