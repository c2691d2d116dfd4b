use reqwest::StatusCode;
use thiserror::Error;

use crate::api::FieldName;

/// Text shown to the user for every failed prediction, whatever the cause.
pub const PREDICTION_FAILED: &str = "Error al predecir el precio. Inténtalo de nuevo.";

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),
}
impl PredictError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormError {
    #[error("field {0} is empty")]
    Missing(FieldName),
    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: FieldName, value: String },
}
