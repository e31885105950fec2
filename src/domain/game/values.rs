//! Value objects owned by the Match module.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum length for a match location.
pub const MAX_LOCATION_LENGTH: usize = 200;

/// Smallest playable match.
pub const MIN_PLAYERS: u32 = 2;

/// Largest supported match.
pub const MAX_PLAYERS: u32 = 50;

/// Validated match location: trimmed, 1-200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the trimmed location is empty
    /// - `OutOfRange` if it exceeds 200 characters
    pub fn new(location: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = location.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        if trimmed.chars().count() > MAX_LOCATION_LENGTH {
            return Err(ValidationError::out_of_range(
                "location",
                1,
                MAX_LOCATION_LENGTH as i32,
                trimmed.chars().count() as i32,
            ));
        }
        Ok(Self(trimmed))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a maximum player count for a match.
pub fn validate_max_players(max_players: u32) -> Result<u32, ValidationError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&max_players) {
        return Err(ValidationError::out_of_range(
            "max_players",
            MIN_PLAYERS as i32,
            MAX_PLAYERS as i32,
            max_players as i32,
        ));
    }
    Ok(max_players)
}
