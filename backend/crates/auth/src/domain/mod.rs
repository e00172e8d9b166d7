//! Domain Layer
//!
//! Contains submissions, value objects, the session cookie entity and the
//! gateway trait to the remote account API.

pub mod entity;
pub mod gateway;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::credentials::{
    LoginCredentials, LoginSubmission, Registration, RegistrationSubmission,
};
pub use entity::session::SessionCookie;
pub use gateway::{AccountGateway, AuthGrant};
pub use validation::{Field, FieldErrors};
