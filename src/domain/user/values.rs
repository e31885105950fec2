//! Value objects owned by the User module.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum length for an email address per RFC 5321.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum password length accepted by the policy.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validated email address.
///
/// Structural validation only: non-empty local part and domain around a
/// single '@', within the RFC length limit. Deliverability is not this
/// module's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates an email address after structural validation.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the input is empty
    /// - `InvalidFormat` for a malformed address
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if email.len() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::invalid_format(
                "email",
                "address exceeds 254 characters",
            ));
        }
        let Some((local, domain)) = email.split_once('@') else {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "malformed local part or domain",
            ));
        }
        if !domain.contains('.') {
            return Err(ValidationError::invalid_format(
                "email",
                "domain has no dot",
            ));
        }
        Ok(Self(email))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Policy-validated password.
///
/// The policy requires at least 8 characters containing at least one
/// letter and one digit. The value is redacted from Debug output;
/// hashing is the auth adapter's concern.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Creates a password after policy validation.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if shorter than the minimum length
    /// - `InvalidFormat` if a letter or digit is missing
    pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
        let password = password.into();
        let length = password.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::out_of_range(
                "password",
                MIN_PASSWORD_LENGTH as i32,
                i32::MAX,
                length as i32,
            ));
        }
        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "password",
                "must contain a letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "password",
                "must contain a digit",
            ));
        }
        Ok(Self(password))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_normal_address() {
        let email = Email::new("player@example.com").unwrap();
        assert_eq!(email.as_str(), "player@example.com");
    }

    #[test]
    fn email_lowercases_and_trims() {
        let email = Email::new("  Player@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "player@example.com");
    }

    #[test]
    fn email_rejects_empty() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn email_rejects_missing_at() {
        assert!(Email::new("player.example.com").is_err());
    }

    #[test]
    fn email_rejects_empty_local_part() {
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn email_rejects_dotless_domain() {
        assert!(Email::new("player@localhost").is_err());
    }

    #[test]
    fn password_accepts_policy_conformant_value() {
        assert!(Password::new("abcdef12").is_ok());
    }

    #[test]
    fn password_rejects_short_value() {
        assert!(Password::new("ab1").is_err());
    }

    #[test]
    fn password_rejects_all_letters() {
        assert!(Password::new("abcdefgh").is_err());
    }

    #[test]
    fn password_rejects_all_digits() {
        assert!(Password::new("12345678").is_err());
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("abcdef12").unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }
}
