//! Health Probe Trait

use platform::ApiError;
use serde_json::Value;

/// Source of the raw remote health payload
#[trait_variant::make(HealthProbe: Send)]
pub trait LocalHealthProbe {
    async fn fetch(&self) -> Result<Value, ApiError>;
}
