//! Derived views for the admin dashboard: appointment search, month
//! calendar, and the customer directory.
//!
//! All functions are pure projections over an appointment slice.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::entities::Appointment;
use crate::error::CoreError;
use crate::status::AppointmentStatus;

// ---------------------------------------------------------------------------
// Appointment search
// ---------------------------------------------------------------------------

/// Status filter applied to the appointment list. `"all"` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    pub fn matches(self, status: AppointmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Appointments matching the status filter and the search term.
///
/// The term matches customer name or service name case-insensitively, or
/// any substring of the phone number as entered.
pub fn filter_appointments<'a>(
    appointments: &'a [Appointment],
    filter: StatusFilter,
    term: &str,
) -> Vec<&'a Appointment> {
    let needle = term.to_lowercase();
    appointments
        .iter()
        .filter(|a| filter.matches(a.status))
        .filter(|a| {
            needle.is_empty()
                || a.customer_name.to_lowercase().contains(&needle)
                || a.customer_phone.contains(term)
                || a.service_name.to_lowercase().contains(&needle)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    /// `YYYY-MM-DD`, compared verbatim with `Appointment::date`.
    pub date: String,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Weekday of the 1st, counted from Sunday = 0.
    pub first_weekday: u32,
    pub days: Vec<CalendarDay>,
}

pub fn calendar_month(
    appointments: &[Appointment],
    year: i32,
    month: u32,
) -> Result<CalendarMonth, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Validation(format!("Invalid calendar month {year}-{month}")))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CoreError::Validation(format!("Invalid calendar month {year}-{month}")))?;
    let days_in_month = next_first.signed_duration_since(first).num_days() as u32;

    let days = (1..=days_in_month)
        .map(|day| {
            let date = format!("{year:04}-{month:02}-{day:02}");
            let appointments = appointments
                .iter()
                .filter(|a| a.date == date)
                .cloned()
                .collect();
            CalendarDay {
                day,
                date,
                appointments,
            }
        })
        .collect();

    Ok(CalendarMonth {
        year,
        month,
        first_weekday: first.weekday().num_days_from_sunday(),
        days,
    })
}

// ---------------------------------------------------------------------------
// Customer directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub name: String,
    pub phone: String,
    pub appointment_count: usize,
}

/// One entry per distinct phone number (as entered), in first-seen order,
/// named after that customer's first appointment.
pub fn customer_directory(appointments: &[Appointment]) -> Vec<CustomerSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut customers: Vec<CustomerSummary> = Vec::new();

    for appt in appointments {
        match index.get(appt.customer_phone.as_str()) {
            Some(&i) => customers[i].appointment_count += 1,
            None => {
                index.insert(&appt.customer_phone, customers.len());
                customers.push(CustomerSummary {
                    name: appt.customer_name.clone(),
                    phone: appt.customer_phone.clone(),
                    appointment_count: 1,
                });
            }
        }
    }

    customers
}
