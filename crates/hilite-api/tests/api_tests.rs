//! API integration tests.
//!
//! These drive the assembled router through `tower::ServiceExt::oneshot`
//! without binding a listener. The full pipeline run needs external tools
//! and is ignored by default.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use hilite_api::{create_router, ApiConfig, AppState};
use hilite_pipeline::PipelineConfig;

fn test_router() -> axum::Router {
    let state = AppState::new(ApiConfig::default(), PipelineConfig::default());
    create_router(state, None)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_healthz_alias() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_reports_tool_checks() {
    let response = test_router()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // Tools may or may not be installed where tests run; either way the
    // response carries a per-tool status.
    let status = response.status();
    assert!(status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    for tool in ["ffmpeg", "ffprobe", "yt_dlp"] {
        let check = &body["checks"][tool];
        assert!(check["status"] == "ok" || check["status"] == "error");
    }
    if status == StatusCode::OK {
        assert_eq!(body["status"], "ready");
    } else {
        assert_eq!(body["status"], "degraded");
    }
}

#[tokio::test]
async fn test_process_rejects_empty_url() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"url": ""}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("url"));
}

#[tokio::test]
async fn test_process_rejects_zero_max_clips() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"url": "https://example.com/v", "max_clips": 0}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_process_rejects_missing_url_field() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"max_clips": 2}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Missing required field is rejected by the JSON extractor.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    assert_eq!(headers.get("X-Frame-Options").unwrap(), "DENY");
    assert!(headers.contains_key("Strict-Transport-Security"));
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response.headers().get("X-Request-ID").unwrap();
    assert!(!request_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_request_id_echoed() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Request-ID", "test-request-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("X-Request-ID").unwrap(),
        "test-request-42"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/process")
                .header("Origin", "http://localhost:3000")
                .header("Access-Control-Request-Method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_metrics_endpoint() {
    // Sole owner of the process-global recorder among these tests.
    let handle = hilite_api::metrics::init_metrics();
    hilite_api::metrics::record_job("completed", 0.1);

    let state = AppState::new(ApiConfig::default(), PipelineConfig::default());
    let app = create_router(state, Some(handle));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("hilite_jobs_total"));
}

#[tokio::test]
async fn test_metrics_route_absent_when_disabled() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Full pipeline run against a real URL.
#[tokio::test]
#[ignore = "requires ffmpeg, ffprobe, yt-dlp on PATH and network access"]
async fn test_process_full_pipeline() {
    dotenvy::dotenv().ok();
    let url = match std::env::var("TEST_VIDEO_URL") {
        Ok(u) => u,
        Err(_) => return,
    };

    let output_dir = tempfile::TempDir::new().unwrap();
    let pipeline_config = PipelineConfig {
        output_dir: output_dir.path().to_path_buf(),
        ..PipelineConfig::default()
    };
    let state = AppState::new(ApiConfig::default(), pipeline_config);

    let response = create_router(state, None)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"url": url, "max_clips": 1}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let clips = body.as_array().unwrap();
    assert!(!clips.is_empty());
    assert!(clips[0]["filename"].as_str().unwrap().ends_with(".mp4"));
}
