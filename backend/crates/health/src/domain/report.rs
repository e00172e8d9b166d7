//! Remote health report
//!
//! Shape of `GET /api/v1/health`. `status` is mandatory; everything else
//! is optional. A field of the wrong type fails the whole report.

use serde::Deserialize;
use serde_json::Value;

use crate::error::HealthError;

/// Literal the remote API uses for a healthy component
pub const OK: &str = "ok";

/// Database component status, either `"ok"` or `{ "status": "ok" }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DatabaseStatus {
    Flat(String),
    Nested { status: String },
}

impl DatabaseStatus {
    pub fn is_ok(&self) -> bool {
        match self {
            DatabaseStatus::Flat(status) | DatabaseStatus::Nested { status } => status == OK,
        }
    }
}

/// Decoded health response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub database: Option<DatabaseStatus>,
}

impl HealthReport {
    /// Decode the remote health payload.
    ///
    /// ## Notes
    /// - `status` must be a string
    /// - `database` may be a bare string or an object with a `status` string
    ///
    /// ## Errors
    /// [`HealthError::Payload`] when the shape does not match
    pub fn from_value(payload: Value) -> Result<Self, HealthError> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn api_healthy(&self) -> bool {
        self.status == OK
    }

    /// Absent database status is unhealthy, not an error
    pub fn database_healthy(&self) -> bool {
        self.database.as_ref().is_some_and(DatabaseStatus::is_ok)
    }
}
