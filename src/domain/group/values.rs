//! Value objects owned by the Group module.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum length for a group name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Validated group name: trimmed, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Creates a group name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the trimmed name is empty
    /// - `OutOfRange` if the trimmed name exceeds 100 characters
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = name.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LENGTH as i32,
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

impl std::fmt::Display for GroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_name() {
        let name = GroupName::new("Kickers").unwrap();
        assert_eq!(name.as_str(), "Kickers");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = GroupName::new("  Sunday League  ").unwrap();
        assert_eq!(name.as_str(), "Sunday League");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(GroupName::new("").is_err());
        assert!(GroupName::new("   ").is_err());
    }

    #[test]
    fn rejects_too_long_name() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(GroupName::new(long).is_err());
    }

    #[test]
    fn accepts_max_length_name() {
        let max = "x".repeat(MAX_NAME_LENGTH);
        assert!(GroupName::new(max).is_ok());
    }
}
