//! HTTP-level tests for the risk routes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use risky_api_risks::{risks_router, RisksState};
use risky_core::{Result, RiskyError};
use risky_risks::{Risk, RiskRepository, RiskService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    risks_router(RisksState::in_memory())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/risks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

// =========================================================================
// GET /risks/:id
// =========================================================================

#[tokio::test]
async fn get_unknown_risk_is_404() {
    let app = app();

    let (status, body) = send(&app, get("/risks/1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let app = app();

    let (status, created) = send(
        &app,
        post_json(r#"{"state":"open","title":"t","description":"d"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(created["state"], "open");
    assert_eq!(created["title"], "t");
    assert_eq!(created["description"], "d");

    let (status, fetched) = send(&app, get(&format!("/risks/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

// =========================================================================
// GET /risks
// =========================================================================

#[tokio::test]
async fn list_empty_store_is_empty_array() {
    let app = app();

    let (status, body) = send(&app, get("/risks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_returns_every_risk_regardless_of_limit() {
    let app = app();
    for title in ["a", "b", "c"] {
        let (status, _) = send(
            &app,
            post_json(json!({"state": "closed", "title": title, "description": "d"}).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/risks?offset=1&limit=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_with_invalid_offset_is_400() {
    let app = app();

    let (status, body) = send(&app, get("/risks?offset=a")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert_eq!(body["message"], "invalid offset: a");
}

#[tokio::test]
async fn list_with_invalid_limit_is_400() {
    let app = app();

    let (status, body) = send(&app, get("/risks?limit=a")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert_eq!(body["message"], "invalid limit: a");
}

#[tokio::test]
async fn list_with_negative_params_is_ok() {
    let app = app();

    let (status, body) = send(&app, get("/risks?offset=-1&limit=-5")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_with_empty_params_uses_defaults() {
    let app = app();

    let (status, _) = send(&app, get("/risks?offset=&limit=")).await;

    assert_eq!(status, StatusCode::OK);
}

// =========================================================================
// POST /risks
// =========================================================================

#[tokio::test]
async fn create_with_blank_fields_reports_all() {
    let app = app();

    let (status, body) = send(&app, post_json("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    for field in ["title", "description", "state"] {
        assert!(
            errors
                .iter()
                .any(|e| e["field"] == field && e["message"] == "cannot be blank"),
            "missing blank error for {field}"
        );
    }
}

#[tokio::test]
async fn create_with_invalid_state() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(r#"{"state":"invalid","title":"t","description":"d"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([{"field": "state", "message": "must be a valid value"}])
    );
}

#[tokio::test]
async fn create_with_long_title() {
    let app = app();
    let request = json!({"state": "open", "title": "x".repeat(129), "description": "d"});

    let (status, body) = send(&app, post_json(request.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([{"field": "title", "message": "the length must be no more than 128"}])
    );
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let app = app();

    let (status, body) = send(&app, post_json("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn failed_create_stores_nothing() {
    let app = app();

    send(&app, post_json(r#"{"state":"bogus"}"#)).await;
    let (_, body) = send(&app, get("/risks")).await;

    assert_eq!(body, json!([]));
}

// =========================================================================
// Storage failures
// =========================================================================

struct BrokenRepository;

#[async_trait]
impl RiskRepository for BrokenRepository {
    async fn get(&self, _id: &str) -> Result<Risk> {
        Err(RiskyError::storage("connection reset"))
    }

    async fn query(&self, _offset: i64, _limit: i64) -> Result<Vec<Risk>> {
        Err(RiskyError::storage("connection reset"))
    }

    async fn create(&self, _risk: Risk) -> Result<()> {
        Err(RiskyError::storage("connection reset"))
    }
}

#[tokio::test]
async fn storage_failure_is_masked_500() {
    let service = Arc::new(RiskService::new(Arc::new(BrokenRepository)));
    let app = risks_router(RisksState::new(service));

    let (status, body) = send(
        &app,
        post_json(r#"{"state":"open","title":"t","description":"d"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(!body["message"]
        .as_str()
        .unwrap()
        .contains("connection reset"));
}
