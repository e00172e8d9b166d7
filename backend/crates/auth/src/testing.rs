//! In-memory account gateway for tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use platform::ApiError;
use serde_json::{Value, json};

use crate::domain::entity::credentials::{LoginCredentials, Registration};
use crate::domain::gateway::{AccountGateway, AuthGrant};

/// Canned remote answer
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(Value),
    Status(u16),
    Garbage,
}

impl Reply {
    pub(crate) fn token(token: &str) -> Self {
        Reply::Json(json!({ "access_token": token, "token_type": "bearer" }))
    }

    fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Status(code) => Err(ApiError::Status {
                status: StatusCode::from_u16(code).unwrap(),
                body: String::new(),
            }),
            Reply::Garbage => Err(ApiError::Decode(
                serde_json::from_str::<Value>("<html>").unwrap_err(),
            )),
        }
    }
}

#[derive(Debug)]
pub(crate) struct FakeGateway {
    pub login: Reply,
    pub register: Reply,
    pub logout: Reply,
    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub last_username: Mutex<Option<String>>,
    pub last_token: Mutex<Option<String>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            login: Reply::token("tok-123"),
            register: Reply::Json(json!({ "id": 1 })),
            logout: Reply::Json(Value::Null),
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            last_username: Mutex::new(None),
            last_token: Mutex::new(None),
        }
    }
}

impl FakeGateway {
    pub(crate) fn login(reply: Reply) -> Self {
        Self {
            login: reply,
            ..Default::default()
        }
    }

    pub(crate) fn register(reply: Reply) -> Self {
        Self {
            register: reply,
            ..Default::default()
        }
    }

    pub(crate) fn remote_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
            + self.register_calls.load(Ordering::SeqCst)
            + self.logout_calls.load(Ordering::SeqCst)
    }
}

impl AccountGateway for FakeGateway {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AuthGrant, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_username.lock().unwrap() = Some(credentials.username().to_string());
        self.login
            .clone()
            .into_result()
            .map(|body| AuthGrant::from_json(&body))
    }

    async fn create_account(&self, registration: &Registration) -> Result<(), ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_username.lock().unwrap() = Some(registration.username().to_string());
        self.register.clone().into_result().map(|_| ())
    }

    async fn revoke_session(&self, access_token: &str) -> Result<(), ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock().unwrap() = Some(access_token.to_string());
        self.logout.clone().into_result().map(|_| ())
    }
}
