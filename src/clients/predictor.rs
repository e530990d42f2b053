//! Thin client for the remote model-inference backend.
//!
//! One POST per call, awaited to completion. No retries and no local
//! recovery: a failed call surfaces its error text and the caller must
//! resubmit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictorError {
    /// Error text reported by the backend, or a status-coded fallback
    /// when the response body carries no detail.
    #[error("{0}")]
    Backend(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a [f64],
}

#[derive(Deserialize)]
struct PredictResponse {
    prediction: Vec<f64>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    detail: Option<String>,
}

pub struct PredictorClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictorClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send a feature vector to `{base_url}/predict` and return the
    /// `prediction` field of the JSON response.
    pub async fn predict(&self, features: &[f64]) -> Result<Vec<f64>, PredictorError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { features })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let detail = body
                .detail
                .unwrap_or_else(|| format!("Prediction failed: {}", status.as_u16()));
            tracing::warn!(status = %status, "Prediction backend returned an error");
            return Err(PredictorError::Backend(detail));
        }

        let body: PredictResponse = response.json().await?;
        Ok(body.prediction)
    }
}
