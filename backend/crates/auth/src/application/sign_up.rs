//! Sign Up Use Case
//!
//! Validates the registration form and creates the account remotely.
//! Registration never signs the user in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::credentials::RegistrationSubmission;
use crate::domain::gateway::AccountGateway;
use crate::error::{AuthError, AuthOperation, AuthResult};

/// Notice shown on the login page after a successful registration
pub const REGISTERED_NOTICE: &str = "Registration successful! Please log in.";

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// Where the browser goes next
    pub redirect_to: String,
    /// One-shot notice for the next page
    pub notice: &'static str,
}

/// Sign up use case
pub struct SignUpUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
    config: Arc<AuthConfig>,
}

impl<G> SignUpUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<AuthConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, submission: RegistrationSubmission) -> AuthResult<SignUpOutput> {
        let registration = submission.validate()?;

        self.gateway
            .create_account(&registration)
            .await
            .map_err(|e| AuthError::from_remote(AuthOperation::Registration, e))?;

        tracing::info!(
            username = %registration.username(),
            email = %registration.email(),
            "User registered"
        );

        Ok(SignUpOutput {
            redirect_to: self.config.login_path.clone(),
            notice: REGISTERED_NOTICE,
        })
    }
}
