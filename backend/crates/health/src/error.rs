//! Health Error Types
//!
//! Never surfaced as an HTTP error: every failure is folded into an
//! all-unhealthy [`HealthSummary`](crate::domain::HealthSummary).

use platform::ApiError;
use thiserror::Error;

/// Reason a health check produced no verdict
#[derive(Debug, Error)]
pub enum HealthError {
    /// Transport failure, non-2xx answer, or non-JSON body
    #[error("Health endpoint unavailable: {0}")]
    Remote(#[from] ApiError),

    /// JSON body without the expected fields
    #[error("Unexpected health response: {0}")]
    Payload(#[from] serde_json::Error),
}
