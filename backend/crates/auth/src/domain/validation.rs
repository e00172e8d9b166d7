//! Field-level validation results
//!
//! A failed submission is reported as one message per failing field, in
//! the order the fields appear on the form.

use std::fmt;

use derive_more::Display;

/// Form field that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display("full_name")]
    FullName,
    #[display("email")]
    Email,
    #[display("username")]
    Username,
    #[display("password")]
    Password,
    #[display("confirm_password")]
    ConfirmPassword,
}

impl Field {
    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Username => "Username",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
        }
    }
}

/// Ordered list of `(field, message)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; only the first message per field is kept
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field, message.into()));
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Trimmed value of a required field, recording `message` when blank
pub(crate) fn required(
    errors: &mut FieldErrors,
    field: Field,
    raw: &str,
    message: &str,
) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
        None
    } else {
        Some(trimmed.to_string())
    }
}
