//! In-memory entity shapes shared by the synchronization layer and its
//! consumers.
//!
//! These serialize in camelCase. Storage rows (snake_case) live in
//! `mucize-db` and are translated by the synchronization layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::icon::ServiceIcon;
use crate::status::AppointmentStatus;
use crate::types::{DbId, Timestamp};
use crate::validation::{require_field, validate_price};

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A cleaning offering managed by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub image: String,
    pub base_price: f64,
}

/// A customer booking request.
///
/// `service_name` is a snapshot of the service title taken at booking time
/// and is never rewritten when the service changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: DbId,
    pub service_name: String,
    pub date: String,
    pub time_slot: String,
    pub address: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub price_estimate: Option<f64>,
    pub created_at: Timestamp,
}

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// A customer rating attached to a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub service_id: DbId,
    pub customer_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Inputs (id and created_at are store-generated)
// ---------------------------------------------------------------------------

/// Input for creating an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: DbId,
    pub service_name: String,
    pub date: String,
    pub time_slot: String,
    pub address: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub price_estimate: Option<f64>,
}

impl NewAppointment {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(price) = self.price_estimate {
            validate_price("priceEstimate", price)?;
        }
        Ok(())
    }
}

/// Input for creating or replacing a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: ServiceIcon,
    #[serde(default)]
    pub image: String,
    pub base_price: f64,
}

impl ServiceInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_field("title", &self.title)?;
        validate_price("basePrice", self.base_price)
    }
}

/// Input for the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_field("name", &self.name)?;
        require_field("email", &self.email)?;
        require_field("phone", &self.phone)?;
        require_field("message", &self.message)
    }
}

/// A review as submitted by a customer.
///
/// `customer_phone` is used only to prove a completed booking and is not
/// persisted with the review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub service_id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}
