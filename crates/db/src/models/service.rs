//! Service model.

use mucize_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `services` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub base_price: f64,
    pub created_at: Timestamp,
}

/// Insert or full-replace payload for a service.
#[derive(Debug, Clone)]
pub struct NewServiceRow {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub base_price: f64,
}
