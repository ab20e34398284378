//! Dashboard statistics, derived from the current collections on every call.

use serde::Serialize;

use crate::entities::{Appointment, ContactMessage};
use crate::status::AppointmentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    /// Sum of `price_estimate` over completed appointments only.
    pub earnings: f64,
    pub message_count: usize,
}

/// Single pass over the appointments; no caching.
pub fn compute_stats(appointments: &[Appointment], messages: &[ContactMessage]) -> DashboardStats {
    let mut stats = DashboardStats {
        total: appointments.len(),
        pending: 0,
        approved: 0,
        earnings: 0.0,
        message_count: messages.len(),
    };

    for appt in appointments {
        match appt.status {
            AppointmentStatus::Pending => stats.pending += 1,
            AppointmentStatus::Approved => stats.approved += 1,
            AppointmentStatus::Completed => {
                stats.earnings += appt.price_estimate.unwrap_or(0.0);
            }
            AppointmentStatus::Rejected => {}
        }
    }

    stats
}
