//! API Integration Tests
//!
//! Author: hephaex@gmail.com

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nef_api::{create_router_for_testing, create_router_with_model};
use nef_extractor::testing::{FailingModel, StubModel};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to create a test request
fn create_json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    match body {
        Some(json_body) => builder
            .body(Body::from(serde_json::to_string(&json_body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request and decode the JSON body
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

async fn extract(app: Router, text: &str) -> (StatusCode, Value) {
    let request = create_json_request("POST", "/api/v1/entities", Some(json!({ "text": text })));
    send(app, request).await
}

// =============================================================================
// Health Check Tests
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_router_for_testing();

    let (status, json) = send(app, create_json_request("GET", "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"], "gazetteer");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = create_router_for_testing();

    let (status, json) = send(app, create_json_request("GET", "/metrics", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["uptime_seconds"].is_number());
    assert!(json["total_requests"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = create_router_for_testing();

    let (status, json) = send(app, create_json_request("GET", "/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/v1/entities"].is_object());
    assert!(json["components"]["schemas"]["ExtractionResult"].is_object());
    assert_eq!(
        json["paths"]["/api/v1/entities"]["post"]["responses"]["500"]["content"]
            ["application/json"]["schema"]["$ref"],
        "#/components/schemas/ApiError"
    );
}

#[tokio::test]
async fn test_openapi_documents_metrics() {
    let app = create_router_for_testing();

    let (status, json) = send(app, create_json_request("GET", "/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/metrics"]["get"].is_object());
    assert!(json["components"]["schemas"]["MetricsResponse"]["properties"]["total_requests"]
        .is_object());
}

// =============================================================================
// Entity Extraction Tests
// =============================================================================

#[tokio::test]
async fn test_extract_with_builtin_gazetteer() {
    let app = create_router_for_testing();

    let (status, json) = extract(app, "France and Germany share a border in Europe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "ents": [
                {"ent": "France", "label": "Location"},
                {"ent": "Germany", "label": "Location"},
                {"ent": "Europe", "label": "Location"}
            ],
            "html": ""
        })
    );
}

#[tokio::test]
async fn test_extract_empty_text() {
    let app = create_router_for_testing();

    let (status, json) = extract(app, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"ents": [], "html": ""}));
}

#[tokio::test]
async fn test_extract_preserves_model_order() {
    let model = StubModel::new("eng")
        .returns_doc_ents(&[("Australia", "GPE"), ("Judith Polgar", "PERSON")]);
    let app = create_router_with_model(Arc::new(model));

    let (status, json) = extract(app, "...").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["ents"],
        json!([
            {"ent": "Australia", "label": "Location"},
            {"ent": "Judith Polgar", "label": "Person"}
        ])
    );
}

#[tokio::test]
async fn test_extract_unmapped_label_is_null() {
    let model = StubModel::new("eng").returns_doc_ents(&[("FIDE", "ORG")]);
    let app = create_router_with_model(Arc::new(model));

    let (status, json) = extract(app, "FIDE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ents"], json!([{"ent": "FIDE", "label": null}]));
}

#[tokio::test]
async fn test_extract_model_failure() {
    let app = create_router_with_model(Arc::new(FailingModel::new("model not loaded")));

    let (status, json) = extract(app, "Australia").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "MODEL_ERROR");
    assert_eq!(json["details"], "model not loaded");
}

#[tokio::test]
async fn test_extract_missing_text_field() {
    let app = create_router_for_testing();

    let request = create_json_request("POST", "/api/v1/entities", Some(json!({"sentence": "x"})));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_extract_rejects_non_json() {
    let app = create_router_for_testing();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/entities")
        .header("Content-Type", "text/plain")
        .body(Body::from("Australia"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// =============================================================================
// Label Table Tests
// =============================================================================

#[tokio::test]
async fn test_list_labels() {
    let app = create_router_for_testing();

    let (status, json) = send(app, create_json_request("GET", "/api/v1/labels", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"internal": "PERSON", "public": "Person"},
            {"internal": "NORP", "public": "Group"},
            {"internal": "LOC", "public": "Location"},
            {"internal": "GPE", "public": "Location"},
            {"internal": "LANGUAGE", "public": "Language"}
        ])
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(create_json_request("GET", "/api/v1/nope", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
