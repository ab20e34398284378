//! HTTP-level integration tests for the `/admin` endpoints.
//!
//! Covers the shared-secret gate, dashboard projections (stats, search,
//! calendar, customers), status updates, service and message management,
//! and store failure handling.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, book, build_test_app, build_test_app_with, create_service, delete_admin, get,
    get_admin, post_json, post_json_admin, put_json_admin, set_status, test_config,
};
use mucize_db::memory::MemoryStore;
use mucize_db::Table;
use serde_json::json;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_accepts_configured_password() {
    let app = build_test_app().await;
    let response = post_json(
        app,
        "/api/v1/admin/login",
        json!({ "password": common::TEST_ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["authenticated"], true);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let app = build_test_app().await;
    let response = post_json(app, "/api/v1/admin/login", json!({ "password": "admin" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_admin_routes_require_header() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/admin/stats").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_stats_count_only_completed_earnings() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ofis Temizliği", 500.0).await;
    let service_id = service["id"].as_str().unwrap();

    let done = book(&app, service_id, "1").await;
    set_status(&app, done["id"].as_str().unwrap(), "approved").await;
    set_status(&app, done["id"].as_str().unwrap(), "completed").await;
    let approved = book(&app, service_id, "2").await;
    set_status(&app, approved["id"].as_str().unwrap(), "approved").await;
    book(&app, service_id, "3").await;

    let json = body_json(get_admin(app, "/api/v1/admin/stats").await).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["pending"], 1);
    assert_eq!(json["data"]["approved"], 1);
    assert_eq!(json["data"]["earnings"], 500.0);
    assert_eq!(json["data"]["messageCount"], 0);
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_appointments_filters_and_searches() {
    let app = build_test_app().await;
    let service = create_service(&app, "Koltuk Yıkama", 300.0).await;
    let service_id = service["id"].as_str().unwrap();
    let first = book(&app, service_id, "0542 111 22 33").await;
    book(&app, service_id, "0555 999 88 77").await;
    set_status(&app, first["id"].as_str().unwrap(), "approved").await;

    let all = body_json(get_admin(app.clone(), "/api/v1/admin/appointments").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let approved = body_json(
        get_admin(app.clone(), "/api/v1/admin/appointments?status=approved").await,
    )
    .await;
    let approved = approved["data"].as_array().unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0]["id"], first["id"]);
    assert_eq!(approved[0]["nextStatuses"], json!(["completed", "rejected"]));

    let by_phone =
        body_json(get_admin(app.clone(), "/api/v1/admin/appointments?q=999").await).await;
    assert_eq!(by_phone["data"].as_array().unwrap().len(), 1);

    let by_service = body_json(
        get_admin(app.clone(), "/api/v1/admin/appointments?status=all&q=koltuk").await,
    )
    .await;
    assert_eq!(by_service["data"].as_array().unwrap().len(), 2);

    let bad = get_admin(app, "/api/v1/admin/appointments?status=archived").await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_returns_patched_appointment() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ev Temizliği", 400.0).await;
    let appt = book(&app, service["id"].as_str().unwrap(), "1").await;

    let response = set_status(&app, appt["id"].as_str().unwrap(), "rejected").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rejected");
    assert_eq!(json["data"]["nextStatuses"], json!([]));
}

#[tokio::test]
async fn test_update_status_unknown_appointment_returns_404() {
    let app = build_test_app().await;
    let response = set_status(&app, &Uuid::new_v4().to_string(), "approved").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_strict_transitions_reject_skipping_approval() {
    let mut config = test_config();
    config.enforce_status_transitions = true;
    let app = build_test_app_with(Arc::new(MemoryStore::new()), config).await;
    let service = create_service(&app, "Ev Temizliği", 400.0).await;
    let appt = book(&app, service["id"].as_str().unwrap(), "1").await;

    let response = set_status(&app, appt["id"].as_str().unwrap(), "completed").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_appointment() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ev Temizliği", 400.0).await;
    let appt = book(&app, service["id"].as_str().unwrap(), "1").await;

    let response = delete_admin(
        app.clone(),
        &format!("/api/v1/admin/appointments/{}", appt["id"].as_str().unwrap()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stats = body_json(get_admin(app, "/api/v1/admin/stats").await).await;
    assert_eq!(stats["data"]["total"], 0);
}

// ---------------------------------------------------------------------------
// Calendar and customers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_calendar_groups_by_date() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ev Temizliği", 400.0).await;
    book(&app, service["id"].as_str().unwrap(), "1").await;

    let json = body_json(
        get_admin(app.clone(), "/api/v1/admin/calendar?year=2024&month=6").await,
    )
    .await;
    let days = json["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0]["date"], "2024-06-01");
    assert_eq!(days[0]["appointments"].as_array().unwrap().len(), 1);
    assert!(days[1]["appointments"].as_array().unwrap().is_empty());
    // 2024-06-01 was a Saturday.
    assert_eq!(json["data"]["firstWeekday"], 6);

    let bad = get_admin(app, "/api/v1/admin/calendar?year=2024&month=13").await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_customer_directory_groups_by_phone() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ev Temizliği", 400.0).await;
    let service_id = service["id"].as_str().unwrap();
    book(&app, service_id, "05421112233").await;
    book(&app, service_id, "05421112233").await;
    book(&app, service_id, "05559998877").await;

    let json = body_json(get_admin(app, "/api/v1/admin/customers").await).await;
    let customers = json["data"].as_array().unwrap();
    assert_eq!(customers.len(), 2);
    let repeat = customers
        .iter()
        .find(|c| c["phone"] == "05421112233")
        .unwrap();
    assert_eq!(repeat["appointmentCount"], 2);
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_service_validates_input() {
    let app = build_test_app().await;
    let response = post_json_admin(
        app,
        "/api/v1/admin/services",
        json!({ "title": "", "basePrice": 100.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_service_keeps_booking_snapshot() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ofis Temizliği", 500.0).await;
    let service_id = service["id"].as_str().unwrap();
    book(&app, service_id, "1").await;

    let response = put_json_admin(
        app.clone(),
        &format!("/api/v1/admin/services/{service_id}"),
        json!({ "title": "Kurumsal Temizlik", "icon": "Building", "basePrice": 750.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Kurumsal Temizlik");
    assert_eq!(json["data"]["basePrice"], 750.0);

    let appts = body_json(get_admin(app, "/api/v1/admin/appointments").await).await;
    assert_eq!(appts["data"][0]["serviceName"], "Ofis Temizliği");
}

#[tokio::test]
async fn test_update_unknown_service_returns_404() {
    let app = build_test_app().await;
    let response = put_json_admin(
        app,
        &format!("/api/v1/admin/services/{}", Uuid::new_v4()),
        json!({ "title": "X", "basePrice": 1.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_service_keeps_appointments() {
    let app = build_test_app().await;
    let service = create_service(&app, "Ofis Temizliği", 500.0).await;
    let service_id = service["id"].as_str().unwrap();
    book(&app, service_id, "1").await;

    let response = delete_admin(app.clone(), &format!("/api/v1/admin/services/{service_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let services = body_json(get(app.clone(), "/api/v1/services").await).await;
    assert!(services["data"].as_array().unwrap().is_empty());

    let appts = body_json(get_admin(app, "/api/v1/admin/appointments").await).await;
    assert_eq!(appts["data"][0]["serviceId"], service["id"]);
}

// ---------------------------------------------------------------------------
// Messages and refresh
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_and_delete_messages() {
    let app = build_test_app().await;
    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/messages",
            json!({
                "name": "Mehmet",
                "email": "m@example.com",
                "phone": "0555",
                "message": "Merhaba",
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let list = body_json(get_admin(app.clone(), "/api/v1/admin/messages").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = delete_admin(app.clone(), &format!("/api/v1/admin/messages/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = body_json(get_admin(app, "/api/v1/admin/messages").await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_returns_snapshot() {
    let app = build_test_app().await;
    create_service(&app, "Ev Temizliği", 400.0).await;

    let response = post_json_admin(app, "/api/v1/admin/refresh", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["loading"], false);
    assert_eq!(json["data"]["services"].as_array().unwrap().len(), 1);
    assert!(json["data"]["reviews"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_unavailable_store_returns_503_without_details() {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with(store.clone(), test_config()).await;
    store.set_unavailable(Table::Services, "password=hunter2").await;

    let response = post_json_admin(
        app,
        "/api/v1/admin/services",
        json!({ "title": "Ev Temizliği", "basePrice": 400.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert!(!json["error"].as_str().unwrap().contains("hunter2"));
}
