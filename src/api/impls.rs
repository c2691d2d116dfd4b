use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::PredictError;

use super::*;

impl Display for FieldName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for FieldName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown form field: {}", s))
    }
}
impl Display for HealthResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let model = if self.model_loaded {
            "loaded"
        } else {
            "not loaded"
        };
        write!(f, "{} (model {})", self.status, model)
    }
}
impl TryFrom<RawPredictionResponse> for PredictionResponse {
    type Error = PredictError;

    fn try_from(raw: RawPredictionResponse) -> Result<Self, Self::Error> {
        let value = raw.prediction.ok_or_else(|| {
            PredictError::MalformedResponse(match raw.error {
                Some(error) => format!("no prediction, backend said: {}", error),
                None => "no prediction field".to_string(),
            })
        })?;
        match value.as_f64() {
            Some(prediction) if prediction.is_finite() => Ok(Self { prediction }),
            _ => Err(PredictError::MalformedResponse(format!(
                "prediction is not a number: {}",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn field_names_round_trip_through_wire_names() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_str(&field.to_string()).unwrap(), field);
        }
        assert!(FieldName::from_str("garage").is_err());
    }
    #[test]
    fn request_serializes_fields_in_wire_order() {
        let request = PredictionRequest {
            bedrooms: 3,
            bathrooms: 2.5,
            sqft_living: 1800,
            sqft_lot: 5000,
            floors: 1.0,
            waterfront: 0,
            condition: 4,
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"bedrooms":3,"bathrooms":2.5,"sqft_living":1800,"sqft_lot":5000,"floors":1.0,"waterfront":0,"condition":4}"#
        );
    }
    #[test]
    fn envelope_with_number_is_accepted() {
        let raw: RawPredictionResponse =
            serde_json::from_value(json!({"prediction": 450000.0, "success": true})).unwrap();
        let response = PredictionResponse::try_from(raw).unwrap();
        assert_eq!(response.prediction, 450000.0);
    }
    #[test]
    fn envelope_without_number_is_malformed() {
        let missing: RawPredictionResponse =
            serde_json::from_value(json!({"success": true})).unwrap();
        let wrong_type: RawPredictionResponse =
            serde_json::from_value(json!({"prediction": "a lot"})).unwrap();
        let null: RawPredictionResponse =
            serde_json::from_value(json!({"prediction": null})).unwrap();
        for raw in [missing, wrong_type, null] {
            let err = PredictionResponse::try_from(raw).unwrap_err();
            assert!(err.is_malformed());
        }
    }
}
