//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::{RemoteLogout, SignOutOutput, SignOutUseCase};
pub use sign_up::{SignUpOutput, SignUpUseCase};
