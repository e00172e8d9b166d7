//! Domain Layer
//!
//! Health report decoding, the summary shown to operators, and the probe
//! trait to the remote API.

pub mod probe;
pub mod report;
pub mod summary;

// Re-exports
pub use probe::HealthProbe;
pub use report::{DatabaseStatus, HealthReport};
pub use summary::HealthSummary;
