//! Review eligibility and rating summaries.
//!
//! A review may only be attached to a service when the submitting phone
//! number has a completed appointment for that exact service. The check runs
//! against the appointment collection the caller already holds; it is not a
//! store-side constraint.

use serde::Serialize;

use crate::entities::{Appointment, Review};
use crate::status::AppointmentStatus;
use crate::types::DbId;

/// Shown when no completed booking matches the submitted phone and service.
pub const REVIEW_INELIGIBLE_MESSAGE: &str =
    "Bu hizmetten faydalanmadınız veya hizmetiniz henüz tamamlanmadı.";

/// Shown after a review has been stored.
pub const REVIEW_ACCEPTED_MESSAGE: &str = "Yorumunuz başarıyla eklendi!";

/// Shown when the store rejects an otherwise eligible review.
pub const REVIEW_STORE_FAILURE_MESSAGE: &str = "Teknik bir hata oluştu.";

/// Shown when the rating falls outside 1-5.
pub const REVIEW_INVALID_RATING_MESSAGE: &str = "Puan 1 ile 5 arasında olmalıdır.";

/// Strip every whitespace character so `"0542 823 76 51"` and
/// `"05428237651"` compare equal.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// True when at least one appointment proves the phone number used the
/// service and the job was completed.
pub fn has_completed_booking(appointments: &[Appointment], service_id: DbId, phone: &str) -> bool {
    let wanted = normalize_phone(phone);
    appointments.iter().any(|appt| {
        appt.status == AppointmentStatus::Completed
            && appt.service_id == service_id
            && normalize_phone(&appt.customer_phone) == wanted
    })
}

/// Review count and average rating for one service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub review_count: usize,
    /// Average rounded to one decimal; `0.0` when there are no reviews.
    pub average: f64,
}

pub fn rating_summary(reviews: &[Review], service_id: DbId) -> RatingSummary {
    let (count, total) = reviews
        .iter()
        .filter(|r| r.service_id == service_id)
        .fold((0usize, 0i64), |(n, sum), r| (n + 1, sum + i64::from(r.rating)));

    let average = if count == 0 {
        0.0
    } else {
        (total as f64 / count as f64 * 10.0).round() / 10.0
    };

    RatingSummary {
        review_count: count,
        average,
    }
}
