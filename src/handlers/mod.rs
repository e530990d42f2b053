pub mod assess;
pub mod demo;
pub mod health;
pub mod stats;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::clients::predictor::PredictorError;
use crate::services::validation::ValidationError;

/// Errors surfaced to API clients. Validation failures block the
/// submission with a warning; remote predictor failures are reported
/// as upstream errors.
pub enum ApiError {
    Validation(ValidationError),
    Predictor(PredictorError),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Predictor(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            ApiError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<PredictorError> for ApiError {
    fn from(err: PredictorError) -> Self {
        Self::Predictor(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
