//! Health Module
//!
//! Reports whether the remote API and its database are up.
//!
//! Clean Architecture structure:
//! - `domain/` - Health report, summary, probe trait
//! - `application/` - Check health use case
//! - `infra/` - Remote health probe
//! - `presentation/` - Page, JSON endpoint, router
//!
//! The check never fails: any problem yields an all-unhealthy summary
//! with a diagnostic message.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::CheckHealthUseCase;
pub use domain::HealthSummary;
pub use error::HealthError;
pub use infra::RemoteHealthProbe;
pub use presentation::router::health_router;
