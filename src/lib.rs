pub mod clients;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::services::AppState;

/// Build the application router. Layers (CORS, request tracing) are
/// attached by the binary so tests can drive the bare routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Assessments
        .route("/api/assessments", post(handlers::assess::create_assessment))
        .route("/api/assessments/form", get(handlers::assess::form_template))
        // Dataset statistics
        .route("/api/stats", get(handlers::stats::dataset_overview))
        // Remote predictor demo
        .route("/api/demo/prediction", post(handlers::demo::run_demo))
        // Health
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
