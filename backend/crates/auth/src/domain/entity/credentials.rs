//! Credential submissions
//!
//! Raw form input and the normalized records produced by validating it.
//! A normalized record is the only thing that may be sent to the remote API.

use crate::domain::validation::{Field, FieldErrors, required};
use crate::domain::value_object::email::Email;
use crate::domain::value_object::password::Password;

const PASSWORD_MISMATCH: &str = "The password and confirmation password do not match.";

/// Sign in form as submitted
#[derive(Debug, Clone, Default)]
pub struct LoginSubmission {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

/// Validated sign in request
#[derive(Debug)]
pub struct LoginCredentials {
    username: String,
    password: Password,
    remember_me: bool,
}

impl LoginSubmission {
    /// Normalize and check a login form.
    ///
    /// ## Errors
    /// Every failing field, first message per field
    pub fn validate(self) -> Result<LoginCredentials, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = required(
            &mut errors,
            Field::Username,
            &self.username,
            "Username is required",
        );
        let password = Password::for_sign_in(self.password)
            .map_err(|e| errors.push(Field::Password, e.to_string()))
            .ok();

        match (username, password) {
            (Some(username), Some(password)) if errors.is_empty() => Ok(LoginCredentials {
                username,
                password,
                remember_me: self.remember_me,
            }),
            _ => Err(errors),
        }
    }
}

impl LoginCredentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }
}

/// Registration form as submitted
#[derive(Debug, Clone, Default)]
pub struct RegistrationSubmission {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated registration request
#[derive(Debug)]
pub struct Registration {
    full_name: String,
    email: Email,
    username: String,
    password: Password,
}

impl RegistrationSubmission {
    /// Normalize and check a registration form.
    ///
    /// ## Validation Rules
    /// - Full name, email, username and password are required
    /// - Email must be well formed
    /// - Password length follows [`Password::for_registration`]
    /// - Confirmation must equal the password
    ///
    /// ## Errors
    /// Every failing field, first message per field
    pub fn validate(self) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = required(
            &mut errors,
            Field::FullName,
            &self.full_name,
            "Full name is required",
        );
        let email = Email::parse(&self.email)
            .map_err(|e| errors.push(Field::Email, e.to_string()))
            .ok();
        let username = required(
            &mut errors,
            Field::Username,
            &self.username,
            "Username is required",
        );

        let mismatch = !self.password.is_empty() && self.password != self.confirm_password;
        let password = Password::for_registration(self.password)
            .map_err(|e| errors.push(Field::Password, e.to_string()))
            .ok();
        if mismatch {
            errors.push(Field::ConfirmPassword, PASSWORD_MISMATCH);
        }

        match (full_name, email, username, password) {
            (Some(full_name), Some(email), Some(username), Some(password))
                if errors.is_empty() =>
            {
                Ok(Registration {
                    full_name,
                    email,
                    username,
                    password,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Registration {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
