//! Health summary shown to operators

use serde::Serialize;

use crate::domain::report::HealthReport;
use crate::error::HealthError;

/// Reduced health of the remote API. Built fresh per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub api_healthy: bool,
    pub database_healthy: bool,
    pub api_version: String,
    pub error_message: String,
}

impl HealthSummary {
    /// Summary of a successfully decoded report
    pub fn from_report(report: &HealthReport) -> Self {
        Self {
            api_healthy: report.api_healthy(),
            database_healthy: report.database_healthy(),
            api_version: report.api_version.clone().unwrap_or_default(),
            error_message: String::new(),
        }
    }

    /// All-unhealthy summary carrying the failure description
    pub fn failed(error: &HealthError) -> Self {
        Self {
            error_message: error.to_string(),
            ..Default::default()
        }
    }
}
