//! Application Layer

pub mod check_health;

pub use check_health::CheckHealthUseCase;
