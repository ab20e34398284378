use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` once the collections have loaded, `"loading"` before that.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a load or refresh is still in progress.
    pub loading: bool,
}

/// GET /health -- returns service status and the data layer's loading flag.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: if state.data.is_loaded() { "ok" } else { "loading" },
        version: env!("CARGO_PKG_VERSION"),
        loading: state.data.is_loading(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
