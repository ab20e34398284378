//! Customer-facing routes. No authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// ```text
/// GET    /services                -> list_services
/// GET    /services/{id}           -> get_service
/// GET    /services/{id}/reviews   -> list_service_reviews
/// GET    /time-slots              -> list_time_slots
/// POST   /bookings                -> create_booking
/// POST   /messages                -> create_message
/// POST   /reviews                 -> submit_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(public::list_services))
        .route("/services/{id}", get(public::get_service))
        .route("/services/{id}/reviews", get(public::list_service_reviews))
        .route("/time-slots", get(public::list_time_slots))
        .route("/bookings", post(public::create_booking))
        .route("/messages", post(public::create_message))
        .route("/reviews", post(public::submit_review))
}
