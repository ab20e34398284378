//! In-process [`DataStore`] for local runs and tests.
//!
//! Insertion order stands in for `created_at` ordering. Individual tables
//! can be marked unavailable or dropped to exercise failure paths.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use mucize_core::types::DbId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::appointment::{AppointmentRow, NewAppointmentRow};
use crate::models::message::{MessageRow, NewMessageRow};
use crate::models::review::{NewReviewRow, ReviewRow};
use crate::models::service::{NewServiceRow, ServiceRow};
use crate::store::{DataStore, Table};

#[derive(Debug, Clone)]
enum Fault {
    Unavailable(String),
    Missing,
}

#[derive(Default)]
struct Tables {
    services: Vec<ServiceRow>,
    appointments: Vec<AppointmentRow>,
    messages: Vec<MessageRow>,
    reviews: Vec<ReviewRow>,
    faults: HashMap<Table, Fault>,
}

impl Tables {
    fn check(&self, table: Table) -> Result<(), StoreError> {
        match self.faults.get(&table) {
            None => Ok(()),
            Some(Fault::Missing) => Err(StoreError::MissingTable {
                table: table.name(),
            }),
            Some(Fault::Unavailable(reason)) => Err(StoreError::Unavailable {
                table: table.name(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Thread-safe via interior `RwLock`; share it behind an `Arc`.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation on `table` fail as if the store were unreachable.
    pub async fn set_unavailable(&self, table: Table, reason: impl Into<String>) {
        self.tables
            .write()
            .await
            .faults
            .insert(table, Fault::Unavailable(reason.into()));
    }

    /// Make `table` behave as if it had never been created.
    pub async fn drop_table(&self, table: Table) {
        self.tables
            .write()
            .await
            .faults
            .insert(table, Fault::Missing);
    }

    /// Clear any fault set on `table`. Rows are kept.
    pub async fn restore(&self, table: Table) {
        self.tables.write().await.faults.remove(&table);
    }
}

fn newest_first<T: Clone>(rows: &[T]) -> Vec<T> {
    rows.iter().rev().cloned().collect()
}

fn remove_by_id<T>(rows: &mut Vec<T>, id: DbId, row_id: impl Fn(&T) -> DbId) -> bool {
    let before = rows.len();
    rows.retain(|r| row_id(r) != id);
    rows.len() != before
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn list_services(&self) -> Result<Vec<ServiceRow>, StoreError> {
        let tables = self.tables.read().await;
        tables.check(Table::Services)?;
        Ok(tables.services.clone())
    }

    async fn insert_service(&self, row: &NewServiceRow) -> Result<ServiceRow, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Services)?;
        let created = ServiceRow {
            id: Uuid::now_v7(),
            title: row.title.clone(),
            description: row.description.clone(),
            icon: row.icon.clone(),
            image: row.image.clone(),
            base_price: row.base_price,
            created_at: Utc::now(),
        };
        tables.services.push(created.clone());
        Ok(created)
    }

    async fn update_service(&self, id: DbId, row: &NewServiceRow) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Services)?;
        let Some(existing) = tables.services.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        existing.title = row.title.clone();
        existing.description = row.description.clone();
        existing.icon = row.icon.clone();
        existing.image = row.image.clone();
        existing.base_price = row.base_price;
        Ok(true)
    }

    async fn delete_service(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Services)?;
        Ok(remove_by_id(&mut tables.services, id, |s| s.id))
    }

    async fn list_appointments(&self) -> Result<Vec<AppointmentRow>, StoreError> {
        let tables = self.tables.read().await;
        tables.check(Table::Appointments)?;
        Ok(newest_first(&tables.appointments))
    }

    async fn insert_appointment(
        &self,
        row: &NewAppointmentRow,
    ) -> Result<AppointmentRow, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Appointments)?;
        let created = AppointmentRow {
            id: Uuid::now_v7(),
            customer_name: row.customer_name.clone(),
            customer_phone: row.customer_phone.clone(),
            service_id: row.service_id,
            service_name: row.service_name.clone(),
            date: row.date.clone(),
            time_slot: row.time_slot.clone(),
            address: row.address.clone(),
            status: row.status.clone(),
            notes: row.notes.clone(),
            price_estimate: row.price_estimate,
            created_at: Utc::now(),
        };
        tables.appointments.push(created.clone());
        Ok(created)
    }

    async fn update_appointment_status(&self, id: DbId, status: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Appointments)?;
        match tables.appointments.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                existing.status = status.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_appointment(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Appointments)?;
        Ok(remove_by_id(&mut tables.appointments, id, |a| a.id))
    }

    async fn list_messages(&self) -> Result<Vec<MessageRow>, StoreError> {
        let tables = self.tables.read().await;
        tables.check(Table::Messages)?;
        Ok(newest_first(&tables.messages))
    }

    async fn insert_message(&self, row: &NewMessageRow) -> Result<MessageRow, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Messages)?;
        let created = MessageRow {
            id: Uuid::now_v7(),
            name: row.name.clone(),
            email: row.email.clone(),
            phone: row.phone.clone(),
            message: row.message.clone(),
            created_at: Utc::now(),
        };
        tables.messages.push(created.clone());
        Ok(created)
    }

    async fn delete_message(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Messages)?;
        Ok(remove_by_id(&mut tables.messages, id, |m| m.id))
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewRow>, StoreError> {
        let tables = self.tables.read().await;
        tables.check(Table::Reviews)?;
        Ok(newest_first(&tables.reviews))
    }

    async fn insert_review(&self, row: &NewReviewRow) -> Result<ReviewRow, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check(Table::Reviews)?;
        let created = ReviewRow {
            id: Uuid::now_v7(),
            service_id: row.service_id,
            customer_name: row.customer_name.clone(),
            rating: row.rating,
            comment: row.comment.clone(),
            created_at: Utc::now(),
        };
        tables.reviews.push(created.clone());
        Ok(created)
    }
}
