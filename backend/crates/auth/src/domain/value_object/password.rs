//! Password Value Object
//!
//! Cleartext password held only for the duration of one request.
//!
//! ## Security Features
//! - Held in a `SecretString`, so `Debug` output is redacted
//! - Never trimmed, never logged, never echoed back into a form
//! - Hashing is done by the remote API

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Minimum length for a new password
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum length for a new password
pub const PASSWORD_MAX_LENGTH: usize = 100;

/// Reason a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
    #[error("The Password must be at least {min} characters long.")]
    TooShort { min: usize },
    #[error("The Password must be at most {max} characters long.")]
    TooLong { max: usize },
}

/// Cleartext password
pub struct Password(SecretString);

impl Password {
    /// Password for sign in: presence only
    pub fn for_sign_in(raw: String) -> Result<Self, PasswordError> {
        if raw.trim().is_empty() {
            return Err(PasswordError::Missing);
        }
        Ok(Self(SecretString::from(raw)))
    }

    /// Password for a new account
    ///
    /// ## Validation Rules
    /// - Not empty or whitespace-only
    /// - At least 6 and at most 100 characters, counted as Unicode scalars
    ///
    /// ## Errors
    /// The first rule that fails, as a [`PasswordError`]
    pub fn for_registration(raw: String) -> Result<Self, PasswordError> {
        if raw.trim().is_empty() {
            return Err(PasswordError::Missing);
        }

        let length = raw.chars().count();
        if length < PASSWORD_MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: PASSWORD_MIN_LENGTH,
            });
        }
        if length > PASSWORD_MAX_LENGTH {
            return Err(PasswordError::TooLong {
                max: PASSWORD_MAX_LENGTH,
            });
        }

        Ok(Self(SecretString::from(raw)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_requires_presence_only() {
        assert!(Password::for_sign_in("x".to_string()).is_ok());
        assert_eq!(
            Password::for_sign_in("   ".to_string()).unwrap_err(),
            PasswordError::Missing
        );
    }

    #[test]
    fn test_registration_length_bounds() {
        assert_eq!(
            Password::for_registration("12345".to_string()).unwrap_err(),
            PasswordError::TooShort { min: 6 }
        );
        assert!(Password::for_registration("123456".to_string()).is_ok());
        assert!(Password::for_registration("a".repeat(100)).is_ok());
        assert_eq!(
            Password::for_registration("a".repeat(101)).unwrap_err(),
            PasswordError::TooLong { max: 100 }
        );
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let password = Password::for_registration(" secret ".to_string()).unwrap();
        assert_eq!(password.expose(), " secret ");
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::for_sign_in("hunter22".to_string()).unwrap();
        assert!(!format!("{password:?}").contains("hunter22"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PasswordError::TooShort { min: 6 }.to_string(),
            "The Password must be at least 6 characters long."
        );
    }
}
