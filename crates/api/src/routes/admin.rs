//! Admin routes, mounted at `/admin`.
//!
//! Everything except `/login` requires the `x-admin-password` header.

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// POST   /login                     -> login
/// GET    /stats                     -> get_stats
/// GET    /appointments              -> list_appointments (?status, q)
/// DELETE /appointments/{id}         -> delete_appointment
/// PATCH  /appointments/{id}/status  -> update_appointment_status
/// GET    /calendar                  -> get_calendar (?year, month)
/// GET    /customers                 -> list_customers
/// POST   /services                  -> create_service
/// PUT    /services/{id}             -> update_service
/// DELETE /services/{id}             -> delete_service
/// GET    /messages                  -> list_messages
/// DELETE /messages/{id}             -> delete_message
/// POST   /refresh                   -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/stats", get(admin::get_stats))
        .route("/appointments", get(admin::list_appointments))
        .route("/appointments/{id}", delete(admin::delete_appointment))
        .route(
            "/appointments/{id}/status",
            patch(admin::update_appointment_status),
        )
        .route("/calendar", get(admin::get_calendar))
        .route("/customers", get(admin::list_customers))
        .route("/services", post(admin::create_service))
        .route(
            "/services/{id}",
            put(admin::update_service).delete(admin::delete_service),
        )
        .route("/messages", get(admin::list_messages))
        .route("/messages/{id}", delete(admin::delete_message))
        .route("/refresh", post(admin::refresh))
}
