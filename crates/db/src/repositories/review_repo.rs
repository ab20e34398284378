//! Repository for the `reviews` table.

use sqlx::PgPool;

use crate::models::review::{NewReviewRow, ReviewRow};

const COLUMNS: &str = "id, service_id, customer_name, rating, comment, created_at";

/// Reviews are never updated or deleted through the store contract.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List all reviews, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ReviewRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC");
        sqlx::query_as::<_, ReviewRow>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, input: &NewReviewRow) -> Result<ReviewRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (service_id, customer_name, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(input.service_id)
            .bind(&input.customer_name)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }
}
