//! HTTP tests driving the router in-process

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_claims::SimulatedAnalysisProvider;
use infra_store::InMemoryClaimsStore;
use interface_api::config::ApiConfig;
use interface_api::{create_router, AppState};
use test_utils::ClaimFixtures;

fn app_with(provider: SimulatedAnalysisProvider) -> Router {
    let store = Arc::new(InMemoryClaimsStore::with_sample_data());
    create_router(AppState::new(store, Arc::new(provider), ApiConfig::default()))
}

fn app() -> Router {
    app_with(SimulatedAnalysisProvider::instant())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, uri, None).await;
    (status, body)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert!(body["store"].as_str().unwrap().starts_with("3 claims"));
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let app = app();

    let (_, headers, _) = send(&app, Method::GET, "/api/claims", None).await;
    assert!(headers.contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/api/claims/1")
        .header("x-request-id", "trace-me-42")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-42");
}

// ============================================================================
// Claims
// ============================================================================

#[tokio::test]
async fn test_list_contains_detail() {
    let app = app();

    let (status, list) = get(&app, "/api/claims").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 3);

    let (status, claim) = get(&app, "/api/claims/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(claim["claimNumber"], "CLM-2024-001537");
    assert_eq!(claim["policyholder"], "Michael Chen");
    assert_eq!(claim["status"], "in_progress");
    assert!(list.as_array().unwrap().contains(&claim));
}

#[tokio::test]
async fn test_get_unknown_claim_is_404() {
    let (status, body) = get(&app(), "/api/claims/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("CLM-999"));
}

#[tokio::test]
async fn test_non_numeric_claim_id_is_400() {
    let (status, body) = get(&app(), "/api/claims/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_create_claim() {
    let app = app();
    let new = ClaimFixtures::new_claim();

    let (status, _, created) = send(
        &app,
        Method::POST,
        "/api/claims",
        Some(json!({
            "claimNumber": new.claim_number,
            "policyholder": new.policyholder,
            "policyNumber": new.policy_number,
            "vehicle": new.vehicle,
            "agentName": new.agent_name,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);
    assert_eq!(created["status"], "initiated");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, fetched) = get(&app, "/api/claims/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_claim_rejects_blank_fields() {
    let (status, _, body) = send(
        &app(),
        Method::POST,
        "/api/claims",
        Some(json!({
            "claimNumber": "",
            "policyholder": "Li Wei",
            "policyNumber": "POL-1",
            "vehicle": "2022 Kia Niro",
            "agentName": "Sarah Johnson",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("claim_number"));
}

#[tokio::test]
async fn test_patch_status_approved() {
    let app = app();
    let (_, before) = get(&app, "/api/claims/1").await;

    let (status, _, updated) = send(&app, Method::PATCH, "/api/claims/1", Some(json!({"status": "approved"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "approved");
    assert_eq!(updated["vehicle"], before["vehicle"]);
    assert_eq!(updated["createdAt"], before["createdAt"]);

    let before_ts: chrono::DateTime<chrono::Utc> = serde_json::from_value(before["updatedAt"].clone()).unwrap();
    let after_ts: chrono::DateTime<chrono::Utc> = serde_json::from_value(updated["updatedAt"].clone()).unwrap();
    assert!(after_ts > before_ts);

    let (_, fetched) = get(&app, "/api/claims/1").await;
    assert_eq!(fetched["status"], "approved");
}

#[tokio::test]
async fn test_patch_unlisted_status_round_trips() {
    let app = app();
    let (status, _, body) = send(&app, Method::PATCH, "/api/claims/1", Some(json!({"status": "closed"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "closed");

    let (_, claim) = get(&app, "/api/claims/1").await;
    assert_eq!(claim["status"], "closed");

    let (_, list) = get(&app, "/api/claims").await;
    assert_eq!(list[0]["status"], "closed");
}

#[tokio::test]
async fn test_patch_blank_status_is_400() {
    let app = app();
    let (status, _, body) = send(&app, Method::PATCH, "/api/claims/1", Some(json!({"status": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (_, claim) = get(&app, "/api/claims/1").await;
    assert_eq!(claim["status"], "in_progress");
}

#[tokio::test]
async fn test_patch_unknown_claim_is_404() {
    let (status, _, body) = send(&app(), Method::PATCH, "/api/claims/77", Some(json!({"status": "approved"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/claims/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Images
// ============================================================================

#[tokio::test]
async fn test_image_upload_list_delete() {
    let app = app();

    let (status, _, image) = send(
        &app,
        Method::POST,
        "/api/claims/1/images",
        Some(json!({"filename": "x.jpg", "fileSize": "2.4 MB"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(image["claimId"], 1);
    assert_eq!(image["filename"], "x.jpg");
    assert_eq!(image["fileSize"], "2.4 MB");
    assert!(image["uploadedAt"].is_string());

    let (_, images) = get(&app, "/api/claims/1/images").await;
    assert_eq!(images, json!([image.clone()]));

    let uri = format!("/api/images/{}", image["id"]);
    let (status, _, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, images) = get(&app, "/api/claims/1/images").await;
    assert_eq!(images, json!([]));

    let (status, _, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_upload_requires_filename() {
    let (status, _, body) = send(
        &app(),
        Method::POST,
        "/api/claims/1/images",
        Some(json!({"filename": "", "fileSize": "1 MB"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _, _) = send(&app(), Method::POST, "/api/claims/1/images", Some(json!({"filename": "a.jpg"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn test_analysis_reads_are_null_before_analysis() {
    let app = app();

    let (status, body) = get(&app, "/api/claims/2/assessment").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = get(&app, "/api/claims/2/estimation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_analyze_without_images_is_400() {
    let (status, _, body) = send(&app(), Method::POST, "/api/claims/1/analyze", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_analyze_unknown_claim_is_404() {
    let (status, _, _) = send(&app(), Method::POST, "/api/claims/55/analyze", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_after_upload() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/claims/1/images",
        Some(json!({"filename": "front.jpg", "fileSize": "3.1 MB"})),
    )
    .await;

    let (status, _, result) = send(&app, Method::POST, "/api/claims/1/analyze", None).await;
    assert_eq!(status, StatusCode::OK);

    let assessment = &result["assessment"];
    assert_eq!(assessment["analysisComplete"], true);
    assert_eq!(assessment["confidence"], 94);
    assert_eq!(assessment["damageItems"][0]["type"], "Front Right Headlight Housing");
    assert_eq!(assessment["damageItems"][0]["severity"], "Severe");

    let estimation = &result["estimation"];
    assert_eq!(estimation["total"], 1600);
    let sum: u64 = ["bumperRepair", "paintwork", "headlight", "miscellaneous"]
        .iter()
        .map(|k| estimation[*k].as_u64().unwrap())
        .sum();
    assert_eq!(sum, 1600);

    let (_, stored) = get(&app, "/api/claims/1/assessment").await;
    assert_eq!(&stored, assessment);
    let (_, stored) = get(&app, "/api/claims/1/estimation").await;
    assert_eq!(&stored, estimation);
}

#[tokio::test(start_paused = true)]
async fn test_analysis_takes_configured_delay() {
    let app = app_with(SimulatedAnalysisProvider::default());
    send(
        &app,
        Method::POST,
        "/api/claims/3/images",
        Some(json!({"filename": "rear.jpg", "fileSize": "1.8 MB"})),
    )
    .await;

    let start = tokio::time::Instant::now();
    let (status, _, _) = send(&app, Method::POST, "/api/claims/3/analyze", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(start.elapsed() >= Duration::from_secs(3));
}
