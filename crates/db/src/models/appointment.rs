//! Appointment model.

use mucize_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `appointments` table.
///
/// `service_id` is not a foreign key; rows outlive the service they name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AppointmentRow {
    pub id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: DbId,
    pub service_name: String,
    pub date: String,
    pub time_slot: String,
    pub address: String,
    pub status: String,
    pub notes: Option<String>,
    pub price_estimate: Option<f64>,
    pub created_at: Timestamp,
}

/// Insert payload for an appointment.
#[derive(Debug, Clone)]
pub struct NewAppointmentRow {
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: DbId,
    pub service_name: String,
    pub date: String,
    pub time_slot: String,
    pub address: String,
    pub status: String,
    pub notes: Option<String>,
    pub price_estimate: Option<f64>,
}
