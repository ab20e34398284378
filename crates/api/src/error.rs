use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mucize_core::error::CoreError;
use mucize_db::StoreError;
use mucize_sync::SyncError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SyncError`] for failures
/// surfaced by the data layer. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mucize_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the synchronization layer.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// The collections have not finished their first load.
    #[error("Data is still loading")]
    Loading,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Sync(SyncError::Core(core)) => classify_core_error(core),
            AppError::Sync(SyncError::Store(store)) => classify_store_error(store),
            AppError::Loading => (
                StatusCode::SERVICE_UNAVAILABLE,
                "LOADING",
                "Data is still loading, try again shortly".to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
    }
}

/// Store failures never leak details to the client.
///
/// An unreachable table maps to 503 so clients can retry; everything else
/// is a sanitized 500.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Data store error");
    match err {
        StoreError::Unavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "STORE_UNAVAILABLE",
            "The data store is temporarily unavailable".to_string(),
        ),
        StoreError::MissingTable { .. } | StoreError::Database(_) => internal(),
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
