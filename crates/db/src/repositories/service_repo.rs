//! Repository for the `services` table.

use mucize_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{NewServiceRow, ServiceRow};

/// Column list for services queries.
const COLUMNS: &str = "id, title, description, icon, image, base_price, created_at";

/// Provides CRUD operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List all services, oldest first (display order).
    pub async fn list(pool: &PgPool) -> Result<Vec<ServiceRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY created_at ASC");
        sqlx::query_as::<_, ServiceRow>(&query).fetch_all(pool).await
    }

    /// Insert a service, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewServiceRow) -> Result<ServiceRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, description, icon, image, base_price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.image)
            .bind(input.base_price)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable field of a service.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewServiceRow,
    ) -> Result<Option<ServiceRow>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                title = $2,
                description = $3,
                icon = $4,
                image = $5,
                base_price = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.image)
            .bind(input.base_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service by ID. Returns `true` if a row was deleted.
    ///
    /// Appointments and reviews that reference the service are left alone.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
