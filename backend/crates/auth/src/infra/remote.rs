//! Remote account API gateway
//!
//! Implements [`AccountGateway`] against the backend REST API.

use platform::{ApiClient, ApiError};
use serde::Serialize;
use serde_json::Value;

use crate::domain::entity::credentials::{LoginCredentials, Registration};
use crate::domain::gateway::{AccountGateway, AuthGrant};

const LOGIN_PATH: &str = "/api/v1/auth/login/json";
const USERS_PATH: &str = "/api/v1/users";
const LOGOUT_PATH: &str = "/api/v1/auth/logout";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CreateUserRequest<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
    full_name: &'a str,
}

/// Backend-API-backed account gateway
#[derive(Debug, Clone)]
pub struct RemoteAccountGateway {
    client: ApiClient,
}

impl RemoteAccountGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AccountGateway for RemoteAccountGateway {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AuthGrant, ApiError> {
        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password().expose(),
        };

        let body: Value = self.client.post_json(LOGIN_PATH, &request).await?;
        Ok(AuthGrant::from_json(&body))
    }

    async fn create_account(&self, registration: &Registration) -> Result<(), ApiError> {
        let request = CreateUserRequest {
            email: registration.email().as_str(),
            username: registration.username(),
            password: registration.password().expose(),
            full_name: registration.full_name(),
        };

        self.client.post_discard(USERS_PATH, &request).await
    }

    async fn revoke_session(&self, access_token: &str) -> Result<(), ApiError> {
        self.client.post_with_bearer(LOGOUT_PATH, access_token).await
    }
}
