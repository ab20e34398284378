//! Handlers for the admin panel.
//!
//! Every handler except [`login`] takes the [`RequireAdmin`] extractor.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use mucize_core::dashboard::{calendar_month, customer_directory, filter_appointments, StatusFilter};
use mucize_core::entities::{Appointment, ServiceInput};
use mucize_core::error::CoreError;
use mucize_core::status::AppointmentStatus;
use mucize_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::middleware::loaded::RequireLoaded;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// Query parameters for the appointment list (`?status=&q=`).
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListParams {
    pub status: Option<String>,
    pub q: Option<String>,
}

/// Query parameters for the calendar (`?year=&month=`). Defaults to the
/// current month.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

/// An appointment plus the statuses the staff workflow allows next.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub next_statuses: &'static [AppointmentStatus],
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self {
            next_statuses: appointment.status.next_statuses(),
            appointment,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// POST /admin/login
///
/// Compares the submitted password with the shared secret. The client sends
/// the same secret in `x-admin-password` on subsequent requests.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if input.password != state.config.admin_password {
        tracing::warn!("Admin login rejected");
        return Err(CoreError::Unauthorized("Invalid admin password".into()).into());
    }

    tracing::info!("Admin login accepted");
    Ok(Json(DataResponse {
        data: LoginResponse {
            authenticated: true,
        },
    }))
}

/// POST /admin/refresh
///
/// Refetch all four collections and return the resulting snapshot.
pub async fn refresh(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    state.data.refresh().await;
    Ok(Json(DataResponse {
        data: state.data.snapshot().await,
    }))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// GET /admin/stats
pub async fn get_stats(
    _admin: RequireAdmin,
    _loaded: RequireLoaded,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.data.stats().await,
    }))
}

/// GET /admin/calendar?year=&month=
pub async fn get_calendar(
    _admin: RequireAdmin,
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let year = params.year.unwrap_or(today.year());
    let month = params.month.unwrap_or(today.month());

    let calendar = state
        .data
        .read(|c| calendar_month(&c.appointments, year, month))
        .await?;

    Ok(Json(DataResponse { data: calendar }))
}

/// GET /admin/customers
pub async fn list_customers(
    _admin: RequireAdmin,
    _loaded: RequireLoaded,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let customers = state
        .data
        .read(|c| customer_directory(&c.appointments))
        .await;
    Ok(Json(DataResponse { data: customers }))
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

/// GET /admin/appointments?status=&q=
pub async fn list_appointments(
    _admin: RequireAdmin,
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParams>,
) -> AppResult<impl IntoResponse> {
    let filter: StatusFilter = params.status.as_deref().unwrap_or_default().parse()?;
    let term = params.q.unwrap_or_default();

    let appointments: Vec<AppointmentView> = state
        .data
        .read(|c| {
            filter_appointments(&c.appointments, filter, term.trim())
                .into_iter()
                .cloned()
                .map(AppointmentView::from)
                .collect()
        })
        .await;

    Ok(Json(DataResponse { data: appointments }))
}

/// PATCH /admin/appointments/{id}/status
pub async fn update_appointment_status(
    _admin: RequireAdmin,
    _loaded: RequireLoaded,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    if !state.data.update_status(id, input.status).await? {
        return Err(CoreError::NotFound {
            entity: "Appointment",
            id,
        }
        .into());
    }

    let appointment = state
        .data
        .read(|c| c.appointments.iter().find(|a| a.id == id).cloned())
        .await
        .map(AppointmentView::from);

    Ok(Json(DataResponse { data: appointment }))
}

/// DELETE /admin/appointments/{id}
pub async fn delete_appointment(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.data.delete_appointment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// POST /admin/services
pub async fn create_service(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ServiceInput>,
) -> AppResult<impl IntoResponse> {
    let service = state.data.add_service(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /admin/services/{id}
pub async fn update_service(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ServiceInput>,
) -> AppResult<impl IntoResponse> {
    if !state.data.update_service(id, input).await? {
        return Err(CoreError::NotFound {
            entity: "Service",
            id,
        }
        .into());
    }

    let service = state.data.service(id).await;
    Ok(Json(DataResponse { data: service }))
}

/// DELETE /admin/services/{id}
///
/// Appointments and reviews that reference the service are kept.
pub async fn delete_service(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.data.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// GET /admin/messages
pub async fn list_messages(
    _admin: RequireAdmin,
    _loaded: RequireLoaded,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.data.messages().await,
    }))
}

/// DELETE /admin/messages/{id}
pub async fn delete_message(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.data.delete_message(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
