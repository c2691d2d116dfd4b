use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The envelope as the backend sends it. Every field is optional here so
/// that shape problems surface as [`crate::error::PredictError::MalformedResponse`]
/// instead of a decode error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RawPredictionResponse {
    #[serde(default)]
    pub prediction: Option<Value>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResponse {
    pub prediction: f64,
}
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}
