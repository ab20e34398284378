//! Gate for endpoints that read the synchronized collections.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Rejects with 503 `LOADING` until the data context's first load has
/// resolved, so empty collections are never served as "no data".
///
/// Later refreshes do not block: the previous collections stay readable
/// while they run.
pub struct RequireLoaded;

impl FromRequestParts<AppState> for RequireLoaded {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.data.is_loaded() {
            Ok(RequireLoaded)
        } else {
            Err(AppError::Loading)
        }
    }
}
