//! Shared-secret admin gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use mucize_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin secret on every admin request.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Requires the configured admin secret in the `x-admin-password` header.
/// Rejects with 401 Unauthorized otherwise.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing x-admin-password header".into(),
                ))
            })?;

        if supplied != state.config.admin_password {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin password".into(),
            )));
        }
        Ok(RequireAdmin)
    }
}
