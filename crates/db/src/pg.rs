//! PostgreSQL-backed [`DataStore`].

use async_trait::async_trait;
use mucize_core::types::DbId;

use crate::error::StoreError;
use crate::models::appointment::{AppointmentRow, NewAppointmentRow};
use crate::models::message::{MessageRow, NewMessageRow};
use crate::models::review::{NewReviewRow, ReviewRow};
use crate::models::service::{NewServiceRow, ServiceRow};
use crate::repositories::{AppointmentRepo, MessageRepo, ReviewRepo, ServiceRepo};
use crate::store::{DataStore, Table};
use crate::DbPool;

/// Delegates every operation to the matching repository and classifies
/// sqlx errors per table.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn classify(table: Table) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| StoreError::from_sqlx(table, err)
}

#[async_trait]
impl DataStore for PgStore {
    async fn list_services(&self) -> Result<Vec<ServiceRow>, StoreError> {
        ServiceRepo::list(&self.pool)
            .await
            .map_err(classify(Table::Services))
    }

    async fn insert_service(&self, row: &NewServiceRow) -> Result<ServiceRow, StoreError> {
        ServiceRepo::create(&self.pool, row)
            .await
            .map_err(classify(Table::Services))
    }

    async fn update_service(&self, id: DbId, row: &NewServiceRow) -> Result<bool, StoreError> {
        ServiceRepo::update(&self.pool, id, row)
            .await
            .map(|updated| updated.is_some())
            .map_err(classify(Table::Services))
    }

    async fn delete_service(&self, id: DbId) -> Result<bool, StoreError> {
        ServiceRepo::delete(&self.pool, id)
            .await
            .map_err(classify(Table::Services))
    }

    async fn list_appointments(&self) -> Result<Vec<AppointmentRow>, StoreError> {
        AppointmentRepo::list(&self.pool)
            .await
            .map_err(classify(Table::Appointments))
    }

    async fn insert_appointment(
        &self,
        row: &NewAppointmentRow,
    ) -> Result<AppointmentRow, StoreError> {
        AppointmentRepo::create(&self.pool, row)
            .await
            .map_err(classify(Table::Appointments))
    }

    async fn update_appointment_status(&self, id: DbId, status: &str) -> Result<bool, StoreError> {
        AppointmentRepo::update_status(&self.pool, id, status)
            .await
            .map_err(classify(Table::Appointments))
    }

    async fn delete_appointment(&self, id: DbId) -> Result<bool, StoreError> {
        AppointmentRepo::delete(&self.pool, id)
            .await
            .map_err(classify(Table::Appointments))
    }

    async fn list_messages(&self) -> Result<Vec<MessageRow>, StoreError> {
        MessageRepo::list(&self.pool)
            .await
            .map_err(classify(Table::Messages))
    }

    async fn insert_message(&self, row: &NewMessageRow) -> Result<MessageRow, StoreError> {
        MessageRepo::create(&self.pool, row)
            .await
            .map_err(classify(Table::Messages))
    }

    async fn delete_message(&self, id: DbId) -> Result<bool, StoreError> {
        MessageRepo::delete(&self.pool, id)
            .await
            .map_err(classify(Table::Messages))
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewRow>, StoreError> {
        ReviewRepo::list(&self.pool)
            .await
            .map_err(classify(Table::Reviews))
    }

    async fn insert_review(&self, row: &NewReviewRow) -> Result<ReviewRow, StoreError> {
        ReviewRepo::create(&self.pool, row)
            .await
            .map_err(classify(Table::Reviews))
    }
}
