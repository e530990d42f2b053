//! Router-level tests for the assessment API.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sugar_insight::config::Config;
use sugar_insight::create_router;
use sugar_insight::services::AppState;

fn test_server(backend_url: &str) -> TestServer {
    let config = Config {
        port: 0,
        backend_url: backend_url.to_string(),
        allowed_origins: vec![],
    };
    let state = Arc::new(AppState::new(config).unwrap());
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server("http://localhost:8000");

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_assessment_high_risk() {
    let server = test_server("http://localhost:8000");

    let response = server
        .post("/api/assessments")
        .json(&json!({
            "pregnancies": "4",
            "glucose": "150",
            "bloodPressure": "85",
            "skinThickness": "20",
            "insulin": "80",
            "bmi": "35",
            "dpf": "0.9",
            "age": "50"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["risk"], "high");
    assert_eq!(body["confidence"], 95);
    assert_eq!(body["title"], "High Risk");
    assert_eq!(body["factors"].as_array().unwrap().len(), 6);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
    assert!(body["disclaimer"].as_str().unwrap().contains("educational purposes"));
}

#[tokio::test]
async fn test_assessment_low_risk_has_no_factors() {
    let server = test_server("http://localhost:8000");

    let response = server
        .post("/api/assessments")
        .json(&json!({
            "pregnancies": "1",
            "glucose": "100",
            "bloodPressure": "70",
            "skinThickness": "20",
            "insulin": "80",
            "bmi": "25",
            "dpf": "0.3",
            "age": "30"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["risk"], "low");
    assert_eq!(body["confidence"], 85);
    assert_eq!(body["factors"].as_array().unwrap().len(), 0);
    assert_eq!(body["title"], "Low Risk");
}

#[tokio::test]
async fn test_assessment_rejects_out_of_range_glucose() {
    let server = test_server("http://localhost:8000");

    let response = server
        .post("/api/assessments")
        .json(&json!({
            "pregnancies": "1",
            "glucose": "310",
            "bloodPressure": "70",
            "skinThickness": "20",
            "insulin": "80",
            "bmi": "25",
            "dpf": "0.3",
            "age": "30"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Glucose levels should be between 0-300 mg/dL" })
    );
}

#[tokio::test]
async fn test_form_template_lists_eight_fields() {
    let server = test_server("http://localhost:8000");

    let response = server.get("/api/assessments/form").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields[1]["key"], "glucose");
    assert_eq!(fields[1]["max"], 300.0);
    assert_eq!(body["defaults"]["glucose"], 120.0);
}

#[tokio::test]
async fn test_stats_serves_dataset_overview() {
    let server = test_server("http://localhost:8000");

    let response = server.get("/api/stats").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    let stats = body["stats"].as_array().unwrap();
    assert_eq!(stats.len(), 4);
    assert_eq!(stats[0]["title"], "Glucose Levels");
    assert_eq!(stats[0]["mean"], 120.9);
    assert_eq!(stats[0]["range"], "0-199 mg/dL");

    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 3);
    assert_eq!(insights[1]["type"], "info");
    assert_eq!(insights[1]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_demo_prediction_forwards_backend_result() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": [151.2] })))
        .mount(&backend)
        .await;

    let server = test_server(&backend.uri());

    let response = server.post("/api/demo/prediction").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "prediction": [151.2] }));
}

#[tokio::test]
async fn test_demo_prediction_surfaces_backend_error() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "model error" })))
        .mount(&backend)
        .await;

    let server = test_server(&backend.uri());

    let response = server.post("/api/demo/prediction").await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>(), json!({ "error": "model error" }));
}
