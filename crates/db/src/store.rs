//! The Remote Data Store contract.
//!
//! One method per table operation. Ordering is part of the contract:
//! services list oldest first; appointments, messages and reviews list
//! newest first. Ids and `created_at` are always store-generated.

use std::fmt;

use async_trait::async_trait;
use mucize_core::types::DbId;

use crate::error::StoreError;
use crate::models::appointment::{AppointmentRow, NewAppointmentRow};
use crate::models::message::{MessageRow, NewMessageRow};
use crate::models::review::{NewReviewRow, ReviewRow};
use crate::models::service::{NewServiceRow, ServiceRow};

/// The four tables behind the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Services,
    Appointments,
    Messages,
    Reviews,
}

impl Table {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Appointments => "appointments",
            Self::Messages => "messages",
            Self::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-table select / insert / update / delete against the hosted store.
///
/// Update and delete return `Ok(false)` when no row matched the id; the
/// store does not treat that as an error.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn list_services(&self) -> Result<Vec<ServiceRow>, StoreError>;
    async fn insert_service(&self, row: &NewServiceRow) -> Result<ServiceRow, StoreError>;
    async fn update_service(&self, id: DbId, row: &NewServiceRow) -> Result<bool, StoreError>;
    async fn delete_service(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list_appointments(&self) -> Result<Vec<AppointmentRow>, StoreError>;
    async fn insert_appointment(
        &self,
        row: &NewAppointmentRow,
    ) -> Result<AppointmentRow, StoreError>;
    async fn update_appointment_status(&self, id: DbId, status: &str) -> Result<bool, StoreError>;
    async fn delete_appointment(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list_messages(&self) -> Result<Vec<MessageRow>, StoreError>;
    async fn insert_message(&self, row: &NewMessageRow) -> Result<MessageRow, StoreError>;
    async fn delete_message(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list_reviews(&self) -> Result<Vec<ReviewRow>, StoreError>;
    async fn insert_review(&self, row: &NewReviewRow) -> Result<ReviewRow, StoreError>;
}
