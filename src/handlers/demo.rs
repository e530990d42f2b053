use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::Serialize;

use super::ApiError;
use crate::services::AppState;

/// Example 10-feature vector for the predictor demo.
pub const SAMPLE_FEATURES: [f64; 10] = [
    0.0380759064,
    0.0506801187,
    0.0616962065,
    0.0218723550,
    -0.0442234984,
    -0.0348207628,
    -0.0434008457,
    -0.0025922620,
    0.0199084209,
    -0.0176461252,
];

#[derive(Debug, Serialize)]
pub struct DemoResponse {
    pub prediction: Vec<f64>,
}

/// POST /api/demo/prediction
///
/// Independent demo path: forwards the sample vector to the remote
/// inference backend. The main assessment flow never goes through here.
pub async fn run_demo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DemoResponse>, ApiError> {
    let prediction = state.predictor.predict(&SAMPLE_FEATURES).await?;
    Ok(Json(DemoResponse { prediction }))
}
