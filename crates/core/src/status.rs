//! Appointment workflow status and the staff-facing transition table.
//!
//! The synchronization layer accepts any status by default; the transition
//! table drives which actions admin views offer and, when strict mode is
//! enabled, which updates are accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Booking request awaiting staff review.
pub const STATUS_PENDING: &str = "pending";

/// Booking confirmed by staff.
pub const STATUS_APPROVED: &str = "approved";

/// Booking declined by staff.
pub const STATUS_REJECTED: &str = "rejected";

/// Service delivered. Only completed bookings count towards earnings and
/// review eligibility.
pub const STATUS_COMPLETED: &str = "completed";

/// All valid status values, in workflow order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_COMPLETED,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Approved => STATUS_APPROVED,
            Self::Rejected => STATUS_REJECTED,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Statuses staff may move an appointment to from this one.
    pub fn next_statuses(self) -> &'static [AppointmentStatus] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Completed, Self::Rejected],
            Self::Rejected | Self::Completed => &[],
        }
    }

    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        self.next_statuses().contains(&next)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_APPROVED => Ok(Self::Approved),
            STATUS_REJECTED => Ok(Self::Rejected),
            STATUS_COMPLETED => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Invalid appointment status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

/// Reject a status change that the staff workflow does not offer.
pub fn validate_transition(
    current: AppointmentStatus,
    next: AppointmentStatus,
) -> Result<(), CoreError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot move appointment from '{current}' to '{next}'"
        )))
    }
}
