//! Handlers for the customer-facing site: service catalogue, booking
//! funnel, contact form and reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use mucize_core::booking::{BookingRequest, TIME_SLOTS};
use mucize_core::entities::{NewMessage, Review, ReviewSubmission, ServiceItem};
use mucize_core::error::CoreError;
use mucize_core::review::{rating_summary, RatingSummary};
use mucize_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::loaded::RequireLoaded;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A service with its reviews and rating summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: ServiceItem,
    pub reviews: Vec<Review>,
    pub rating: RatingSummary,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// GET /services
pub async fn list_services(
    _loaded: RequireLoaded,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = state.data.services().await;
    Ok(Json(DataResponse { data: services }))
}

/// GET /services/{id}
pub async fn get_service(
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = state
        .data
        .read(|c| {
            let service = c.services.iter().find(|s| s.id == id)?.clone();
            Some(ServiceDetail {
                service,
                reviews: reviews_for(&c.reviews, id),
                rating: rating_summary(&c.reviews, id),
            })
        })
        .await
        .ok_or(CoreError::NotFound {
            entity: "Service",
            id,
        })?;

    Ok(Json(DataResponse { data: detail }))
}

/// GET /services/{id}/reviews
///
/// Reviews are returned even when the service itself has been deleted.
pub async fn list_service_reviews(
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reviews = state.data.read(|c| reviews_for(&c.reviews, id)).await;
    Ok(Json(DataResponse { data: reviews }))
}

fn reviews_for(reviews: &[Review], service_id: DbId) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| r.service_id == service_id)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// GET /time-slots
pub async fn list_time_slots() -> impl IntoResponse {
    Json(DataResponse { data: TIME_SLOTS })
}

/// POST /bookings
///
/// Resolve the service from the current collection and create a pending
/// appointment priced at its base price.
pub async fn create_booking(
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> AppResult<impl IntoResponse> {
    request.validate()?;

    let service = state.data.service(request.service_id).await.ok_or_else(|| {
        CoreError::Validation(format!("Unknown service {}", request.service_id))
    })?;

    let appointment = state
        .data
        .add_appointment(request.into_appointment(&service))
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: appointment })))
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<NewMessage>,
) -> AppResult<impl IntoResponse> {
    let message = state.data.add_message(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// POST /reviews
///
/// Always answers with the `{ success, message }` outcome: 201 when the
/// review was stored, 422 when it was refused. Eligibility is only judged
/// once the appointments have loaded.
pub async fn submit_review(
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Json(submission): Json<ReviewSubmission>,
) -> impl IntoResponse {
    let outcome = state.data.add_review(submission).await;
    let status = if outcome.success {
        StatusCode::CREATED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(DataResponse { data: outcome }))
}
