//! Review model.

use mucize_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reviews` table. Reviews never store the reviewer's phone.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewRow {
    pub id: DbId,
    pub service_id: DbId,
    pub customer_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct NewReviewRow {
    pub service_id: DbId,
    pub customer_name: String,
    pub rating: i32,
    pub comment: String,
}
