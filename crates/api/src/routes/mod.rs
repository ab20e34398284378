pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services                        list (public)
/// /services/{id}                   detail with reviews and rating summary
/// /services/{id}/reviews           reviews for one service
/// /time-slots                      standard booking slots
/// /bookings                        booking submission (POST)
/// /messages                        contact form (POST)
/// /reviews                         review submission (POST)
///
/// /admin/login                     shared-secret check (POST)
/// /admin/stats                     dashboard statistics
/// /admin/appointments              search (?status, q)
/// /admin/appointments/{id}         delete
/// /admin/appointments/{id}/status  status update (PATCH)
/// /admin/calendar                  month view (?year, month)
/// /admin/customers                 customer directory
/// /admin/services                  create
/// /admin/services/{id}             update, delete
/// /admin/messages                  list
/// /admin/messages/{id}             delete
/// /admin/refresh                   refetch all collections (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
