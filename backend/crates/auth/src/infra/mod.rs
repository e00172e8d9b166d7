//! Infrastructure Layer
//!
//! External service integrations.

pub mod remote;

pub use remote::RemoteAccountGateway;
