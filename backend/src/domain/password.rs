//! Password value object.
//!
//! The checks run in a fixed order and the constructor fails on the first
//! violation: length, then lowercase, uppercase, digit, and finally one of
//! the allowed special characters. Debug output never reveals the secret.

use std::fmt;

/// Minimum allowed password length.
pub const PASSWORD_MIN: usize = 8;
/// Maximum allowed password length.
pub const PASSWORD_MAX: usize = 64;

/// Characters accepted for the special-character requirement.
const SPECIAL_CHARACTERS: &[char] = &['!', '?', '@', '-', '+'];

/// Validation errors returned by [`Password::new`], in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// The password was outside the allowed length window.
    Length {
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// No lowercase letter was present.
    MissingLowercase,
    /// No uppercase letter was present.
    MissingUppercase,
    /// No decimal digit was present.
    MissingDigit,
    /// None of the allowed special characters was present.
    MissingSpecial,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { min, max } => {
                write!(f, "password must be {min} to {max} characters")
            }
            Self::MissingLowercase => write!(f, "password must contain a lowercase letter"),
            Self::MissingUppercase => write!(f, "password must contain an uppercase letter"),
            Self::MissingDigit => write!(f, "password must contain a digit"),
            Self::MissingSpecial => {
                write!(f, "password must contain one of `!?@-+`")
            }
        }
    }
}

impl std::error::Error for PasswordValidationError {}

/// Validated password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validate and construct a password.
    pub fn new(value: impl Into<String>) -> Result<Self, PasswordValidationError> {
        let value = value.into();
        let length = value.chars().count();
        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
            return Err(PasswordValidationError::Length {
                min: PASSWORD_MIN,
                max: PASSWORD_MAX,
            });
        }
        if !value.chars().any(|ch| ch.is_ascii_lowercase()) {
            return Err(PasswordValidationError::MissingLowercase);
        }
        if !value.chars().any(|ch| ch.is_ascii_uppercase()) {
            return Err(PasswordValidationError::MissingUppercase);
        }
        if !value.chars().any(|ch| ch.is_ascii_digit()) {
            return Err(PasswordValidationError::MissingDigit);
        }
        if !value.chars().any(|ch| SPECIAL_CHARACTERS.contains(&ch)) {
            return Err(PasswordValidationError::MissingSpecial);
        }
        Ok(Self(value))
    }

    /// The raw secret, needed when dehydrating towards the upstream service.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accepts_a_conforming_password() {
        let password = Password::new("Test1234!").expect("valid password");
        assert_eq!(password.as_str(), "Test1234!");
    }

    #[rstest]
    fn rejects_missing_uppercase() {
        let err = Password::new("test1234!").expect_err("no uppercase should fail");
        assert_eq!(err, PasswordValidationError::MissingUppercase);
    }

    #[rstest]
    fn rejects_missing_lowercase() {
        let err = Password::new("TEST1234!").expect_err("no lowercase should fail");
        assert_eq!(err, PasswordValidationError::MissingLowercase);
    }

    #[rstest]
    fn rejects_missing_digit() {
        let err = Password::new("Testtest!").expect_err("no digit should fail");
        assert_eq!(err, PasswordValidationError::MissingDigit);
    }

    #[rstest]
    fn rejects_missing_special_character() {
        let err = Password::new("Test1234").expect_err("no special character should fail");
        assert_eq!(err, PasswordValidationError::MissingSpecial);
    }

    #[rstest]
    fn rejects_over_length_even_when_otherwise_valid() {
        let long = format!("Aa1!{}", "x".repeat(61));
        assert_eq!(long.chars().count(), 65);
        let err = Password::new(long).expect_err("over-length password should fail");
        assert_eq!(
            err,
            PasswordValidationError::Length {
                min: PASSWORD_MIN,
                max: PASSWORD_MAX
            }
        );
    }

    #[rstest]
    fn length_is_checked_before_character_classes() {
        // "short" also misses every character class; length must win.
        let err = Password::new("short").expect_err("short password should fail");
        assert!(matches!(err, PasswordValidationError::Length { .. }));
    }

    #[rstest]
    fn debug_output_redacts_the_secret() {
        let password = Password::new("Test1234!").expect("valid password");
        let rendered = format!("{password:?}");
        assert!(!rendered.contains("Test1234"));
        assert!(rendered.contains("<redacted>"));
    }
}
