//! Shared fixtures for handler tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use catpoint_adapter_virtual::{InMemorySecurityRepository, VirtualCatDetector};
use catpoint_app::services::security_service::SecurityService;

use crate::api::camera::DEFAULT_MAX_FRAME_BYTES;
use crate::state::AppState;

pub(crate) type TestState = AppState<InMemorySecurityRepository, Arc<VirtualCatDetector>>;

/// A router over a fresh in-memory service, plus handles to poke at it.
pub(crate) fn test_app() -> (Router, TestState, Arc<VirtualCatDetector>) {
    test_app_with_frame_limit(DEFAULT_MAX_FRAME_BYTES)
}

pub(crate) fn test_app_with_frame_limit(
    max_frame_bytes: usize,
) -> (Router, TestState, Arc<VirtualCatDetector>) {
    let detector = Arc::new(VirtualCatDetector::default());
    let service = SecurityService::new(InMemorySecurityRepository::new(), Arc::clone(&detector));
    let state = AppState::new(service);
    let app = crate::router::build_with_frame_limit(state.clone(), max_frame_bytes);
    (app, state, detector)
}

/// Send a request with an optional JSON body. An empty response body reads as `null`.
pub(crate) async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

/// `POST` raw bytes.
pub(crate) async fn request_bytes(
    app: Router,
    uri: &str,
    bytes: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .body(Body::from(bytes))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
