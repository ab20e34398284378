//! Repository for the `appointments` table.

use mucize_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::{AppointmentRow, NewAppointmentRow};

/// Column list for appointments queries.
const COLUMNS: &str = "id, customer_name, customer_phone, service_id, service_name, \
    date, time_slot, address, status, notes, price_estimate, created_at";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// List all appointments, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AppointmentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments ORDER BY created_at DESC");
        sqlx::query_as::<_, AppointmentRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert an appointment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewAppointmentRow,
    ) -> Result<AppointmentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments
                (customer_name, customer_phone, service_id, service_name, date,
                 time_slot, address, status, notes, price_estimate)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppointmentRow>(&query)
            .bind(&input.customer_name)
            .bind(&input.customer_phone)
            .bind(input.service_id)
            .bind(&input.service_name)
            .bind(&input.date)
            .bind(&input.time_slot)
            .bind(&input.address)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(input.price_estimate)
            .fetch_one(pool)
            .await
    }

    /// Set the status of one appointment. Returns `true` if the row exists.
    pub async fn update_status(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE appointments SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an appointment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
