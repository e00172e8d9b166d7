//! Form DTOs (Data Transfer Objects)
//!
//! Browser forms are `application/x-www-form-urlencoded`. Every field
//! defaults to empty so a missing field becomes a validation message
//! instead of a rejection.

use serde::Deserialize;

use crate::domain::entity::credentials::{LoginSubmission, RegistrationSubmission};

// ============================================================================
// Sign In
// ============================================================================

/// Login form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Checkbox; absent when unticked
    pub remember_me: Option<String>,
}

impl LoginForm {
    pub fn remember_me(&self) -> bool {
        self.remember_me
            .as_deref()
            .map(str::trim)
            .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "on" | "1"))
    }

    pub fn into_submission(self) -> LoginSubmission {
        let remember_me = self.remember_me();
        LoginSubmission {
            username: self.username,
            password: self.password,
            remember_me,
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// Registration form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn into_submission(self) -> RegistrationSubmission {
        RegistrationSubmission {
            full_name: self.full_name,
            email: self.email,
            username: self.username,
            password: self.password,
            confirm_password: self.confirm_password,
        }
    }
}
