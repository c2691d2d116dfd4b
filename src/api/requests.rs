use serde::{Deserialize, Serialize};

/// Body of `POST /predict`. Field order is the order the backend builds its
/// feature frame in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PredictionRequest {
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft_living: i64,
    pub sqft_lot: i64,
    pub floors: f64,
    pub waterfront: i64,
    pub condition: i64,
}
