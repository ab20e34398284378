//! Booking funnel submission: turns what the customer picked into an
//! appointment input.

use serde::Deserialize;

use crate::entities::{NewAppointment, ServiceItem};
use crate::error::CoreError;
use crate::status::AppointmentStatus;
use crate::types::DbId;
use crate::validation::require_field;

/// Time slots offered by the booking form. Free-form slots are also accepted.
pub const TIME_SLOTS: &[&str] = &["09:00 - 13:00", "13:00 - 17:00", "17:00 - 21:00", "Tam Gün"];

/// Room layout assumed when the customer does not pick one.
pub const DEFAULT_ROOM_LAYOUT: &str = "2+1";

/// What the booking form submits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub service_id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: String,
    pub time_slot: String,
    pub address: String,
    #[serde(default)]
    pub room_count: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_field("customerName", &self.customer_name)?;
        require_field("customerPhone", &self.customer_phone)?;
        require_field("address", &self.address)?;
        require_field("date", &self.date)?;
        require_field("timeSlot", &self.time_slot)
    }

    /// Build a pending appointment priced at the service's base price.
    ///
    /// The service title is copied into `service_name` as a snapshot.
    pub fn into_appointment(self, service: &ServiceItem) -> NewAppointment {
        let room = self
            .room_count
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROOM_LAYOUT.to_string());
        let notes = format!("{room} - {}", self.notes.unwrap_or_default());

        NewAppointment {
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            service_id: service.id,
            service_name: service.title.clone(),
            date: self.date,
            time_slot: self.time_slot,
            address: self.address,
            status: AppointmentStatus::Pending,
            notes: Some(notes),
            price_estimate: Some(service.base_price),
        }
    }
}
