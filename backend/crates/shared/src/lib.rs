//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! account and health features of the web front end:
//! - Error classification ([`error::kind::ErrorKind`])
//! - The user-facing error value ([`error::app_error::AppError`])
//! - Framework conversions (feature `axum`)
//!
//! **Design Principle**: Only include things that have the same meaning
//! in every feature crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
