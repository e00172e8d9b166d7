//! Auth (Authentication) Session Bridge
//!
//! Clean Architecture structure:
//! - `domain/` - Submissions, value objects, session cookie, gateway trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Remote account API gateway
//! - `presentation/` - HTTP handlers, forms, pages, router
//!
//! ## Features
//! - Login and registration forms validated locally before any remote call
//! - Remote access token held in a signed, HttpOnly session cookie
//! - "Remember me" extends the session from 1 hour to 7 days
//! - Logout always clears the cookie, whatever the remote API does
//!
//! ## Security Model
//! - Passwords are never stored, logged, or echoed back into forms
//! - `Secure` is set only when the browser reached us over HTTPS
//! - Remote error text never reaches the browser

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::remote::RemoteAccountGateway;
pub use presentation::middleware::{AuthStatus, check_auth_session};
pub use presentation::router::auth_router;
