#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mucize_api::config::{ServerConfig, StoreBackend};
use mucize_api::router::build_app_router;
use mucize_api::state::AppState;
use mucize_db::memory::MemoryStore;
use mucize_sync::{DataContext, SyncOptions};

pub const TEST_ADMIN_PASSWORD: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults and the in-memory backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        store_backend: StoreBackend::Memory,
        database_url: None,
        enforce_status_transitions: false,
    }
}

/// Build the full application router over a fresh in-memory store, with
/// the initial load already resolved.
pub async fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()), test_config()).await
}

/// Same as [`build_test_app`], over a caller-supplied store so tests can
/// seed rows or inject faults.
pub async fn build_test_app_with(store: Arc<MemoryStore>, config: ServerConfig) -> Router {
    let (app, data) = build_unloaded_app(store, config);
    data.refresh().await;
    app
}

/// Build the router without running the initial load, returning the data
/// context so the test decides when it resolves.
pub fn build_unloaded_app(
    store: Arc<MemoryStore>,
    config: ServerConfig,
) -> (Router, Arc<DataContext>) {
    let data = Arc::new(DataContext::new(
        store,
        SyncOptions {
            enforce_status_transitions: config.enforce_status_transitions,
        },
    ));
    let state = AppState {
        data: data.clone(),
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), data)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    admin: bool,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if admin {
        builder = builder.header("x-admin-password", TEST_ADMIN_PASSWORD);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, false, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, false, Some(body)).await
}

pub async fn get_admin(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, true, None).await
}

pub async fn post_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, true, Some(body)).await
}

pub async fn put_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, true, Some(body)).await
}

pub async fn patch_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, true, Some(body)).await
}

pub async fn delete_admin(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, true, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a service through the admin API and return its JSON.
pub async fn create_service(app: &Router, title: &str, price: f64) -> serde_json::Value {
    let response = post_json_admin(
        app.clone(),
        "/api/v1/admin/services",
        serde_json::json!({
            "title": title,
            "description": "Detaylı temizlik",
            "icon": "Briefcase",
            "image": "",
            "basePrice": price,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Book a service through the public API and return the appointment JSON.
pub async fn book(app: &Router, service_id: &str, phone: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/v1/bookings",
        serde_json::json!({
            "serviceId": service_id,
            "customerName": "Ayşe Yılmaz",
            "customerPhone": phone,
            "date": "2024-06-01",
            "timeSlot": "09:00 - 13:00",
            "address": "Ulukavak Mah. Akpınar 8.Sk",
            "roomCount": "3+1",
            "notes": "Kedi var",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Move an appointment to `status` through the admin API.
pub async fn set_status(app: &Router, appointment_id: &str, status: &str) -> Response {
    patch_json_admin(
        app.clone(),
        &format!("/api/v1/admin/appointments/{appointment_id}/status"),
        serde_json::json!({ "status": status }),
    )
    .await
}
