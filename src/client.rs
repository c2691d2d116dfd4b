use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Response;

use crate::api::*;
use crate::error::PredictError;

/// Anything that can turn a filled-in form into a price.
#[async_trait]
pub trait Predictor {
    async fn predict_price(&self, request: &PredictionRequest) -> Result<f64, PredictError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    client: reqwest::Client,
}
impl Client {
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::new();
        Self { url, client }
    }
    pub fn with_timeout(url: String, timeout: Option<Duration>) -> Result<Self, PredictError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            url,
            client: builder.build()?,
        })
    }
    pub fn url(&self) -> &str {
        &self.url
    }
    fn endpoint(&self, path: &'static str) -> String {
        self.url.trim_end_matches('/').to_string() + path
    }
    pub async fn health(&self) -> Result<HealthResponse, PredictError> {
        let response = self.client.get(self.endpoint("/health")).send().await?;
        let response = bail_if_err(response).await?;
        Ok(response.json::<HealthResponse>().await?)
    }
}
#[async_trait]
impl Predictor for Client {
    async fn predict_price(&self, request: &PredictionRequest) -> Result<f64, PredictError> {
        debug!("POST {} {:?}", self.endpoint("/predict"), request);
        let response = self
            .client
            .post(self.endpoint("/predict"))
            .json(request)
            .send()
            .await?;
        let response = bail_if_err(response).await?;
        let body = response.text().await?;
        let raw = serde_json::from_str::<RawPredictionResponse>(&body)
            .map_err(|e| PredictError::MalformedResponse(format!("{}: {}", e, body)))?;
        let response = PredictionResponse::try_from(raw)?;
        Ok(response.prediction)
    }
}

async fn bail_if_err(response: Response) -> Result<Response, PredictError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        Err(PredictError::Status { status, body })
    } else {
        Ok(response)
    }
}
