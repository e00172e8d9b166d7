//! Auth Error Types
//!
//! Auth-specific error variants, classified with the shared
//! `kernel::error::kind::ErrorKind`. Remote failures are classified by
//! structure (status class, transport failure), never by message text.

use axum::http::StatusCode;
use derive_more::Display;
use kernel::error::kind::ErrorKind;
use platform::ApiError;
use thiserror::Error;

use crate::domain::validation::FieldErrors;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Operation that reached the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AuthOperation {
    #[display("login")]
    Login,
    #[display("registration")]
    Registration,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Form input failed local validation; nothing was sent remotely
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Remote API rejected the credentials, or accepted them without a token
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// Remote API rejected the registration (duplicate email or username)
    #[error("A user with this email or username already exists.")]
    AccountConflict,

    /// Remote API unreachable, timed out, failed, or answered garbage
    #[error("Remote {operation} failed: {source}")]
    ServiceUnavailable {
        operation: AuthOperation,
        #[source]
        source: ApiError,
    },
}

impl AuthError {
    /// Classify a failed remote call.
    ///
    /// A 4xx answer is the API's verdict on the submitted data; anything
    /// else means the API could not give a verdict.
    pub fn from_remote(operation: AuthOperation, source: ApiError) -> Self {
        if source.is_client_error() {
            tracing::warn!(
                %operation,
                status = source.status().map(|s| s.as_u16()),
                "Remote account API rejected the request"
            );
            match operation {
                AuthOperation::Login => AuthError::InvalidCredentials,
                AuthOperation::Registration => AuthError::AccountConflict,
            }
        } else {
            AuthError::ServiceUnavailable { operation, source }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::AccountConflict => ErrorKind::Conflict,
            AuthError::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Message safe to show on the re-rendered form
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::Validation(_) => "Please correct the errors below.",
            AuthError::InvalidCredentials => "Invalid username or password.",
            AuthError::AccountConflict => "A user with this email or username already exists.",
            AuthError::ServiceUnavailable {
                operation: AuthOperation::Login,
                ..
            } => "An error occurred during login. Please try again later.",
            AuthError::ServiceUnavailable {
                operation: AuthOperation::Registration,
                ..
            } => "An error occurred during registration. Please try again later.",
        }
    }

    /// Per-field messages, for validation failures only
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::ServiceUnavailable { operation, source } => {
                tracing::error!(
                    %operation,
                    status = source.status().map(|s| s.as_u16()),
                    error = %source,
                    "Remote account API unavailable"
                );
            }
            // Already logged, with the remote status, where it was classified
            AuthError::InvalidCredentials | AuthError::AccountConflict => {}
            AuthError::Validation(errors) => {
                tracing::debug!(fields = errors.len(), "Form validation failed");
            }
        }
    }
}

impl From<FieldErrors> for AuthError {
    fn from(errors: FieldErrors) -> Self {
        AuthError::Validation(errors)
    }
}
