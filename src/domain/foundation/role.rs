//! Player role levels within a group.

use serde::{Deserialize, Serialize};

/// Permission level of a player within a group.
///
/// Roles are totally ordered for permission checks:
/// `Member < Admin < Master`. Variant order drives the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular player. May manage only their own status.
    Member,

    /// May invite users and manage members.
    Admin,

    /// Group owner. Exactly one per group while any player exists.
    Master,
}

impl Role {
    /// Whether this role strictly outranks another.
    pub fn outranks(&self, other: &Role) -> bool {
        self > other
    }

    /// Returns the display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Admin => "Admin",
            Role::Master => "Master",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
