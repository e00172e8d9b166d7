//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Remote API client (JSON over HTTP, structured failure classes)
//! - Cookie management
//! - Request transport detection
//! - Minimal HTML page helpers
//! - Environment configuration helpers

pub mod api_client;
pub mod client;
pub mod config;
pub mod cookie;
pub mod html;

pub use api_client::{ApiClient, ApiClientConfig, ApiError};
