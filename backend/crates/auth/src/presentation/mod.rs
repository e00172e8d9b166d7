//! Presentation Layer
//!
//! HTTP handlers, form DTOs, pages, router, and middleware.

pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod view;

pub use handlers::AuthAppState;
pub use middleware::{AuthStatus, check_auth_session};
pub use router::{auth_router, auth_router_generic};
