//! Contact message model.

use mucize_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MessageRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct NewMessageRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}
