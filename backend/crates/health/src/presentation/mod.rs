//! Presentation Layer
//!
//! Health page, JSON status endpoint and router.

pub mod handlers;
pub mod router;

pub use handlers::HealthAppState;
pub use router::{health_router, health_router_generic};
