//! Check Health Use Case
//!
//! Asks the remote API for its health and reduces the answer. Total: any
//! failure becomes an all-unhealthy summary.

use std::sync::Arc;

use crate::domain::probe::HealthProbe;
use crate::domain::report::HealthReport;
use crate::domain::summary::HealthSummary;
use crate::error::HealthError;

/// Check health use case
pub struct CheckHealthUseCase<P>
where
    P: HealthProbe,
{
    probe: Arc<P>,
}

impl<P> CheckHealthUseCase<P>
where
    P: HealthProbe,
{
    pub fn new(probe: Arc<P>) -> Self {
        Self { probe }
    }

    pub async fn execute(&self) -> HealthSummary {
        match self.check().await {
            Ok(summary) => {
                tracing::debug!(
                    api_healthy = summary.api_healthy,
                    database_healthy = summary.database_healthy,
                    api_version = %summary.api_version,
                    "Health check completed"
                );
                summary
            }
            Err(e) => {
                tracing::error!(error = %e, "Error checking API health");
                HealthSummary::failed(&e)
            }
        }
    }

    async fn check(&self) -> Result<HealthSummary, HealthError> {
        let payload = self.probe.fetch().await?;
        let report = HealthReport::from_value(payload)?;
        Ok(HealthSummary::from_report(&report))
    }
}
