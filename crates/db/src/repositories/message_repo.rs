//! Repository for the `messages` table.

use mucize_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{MessageRow, NewMessageRow};

const COLUMNS: &str = "id, name, email, phone, message, created_at";

/// Contact messages are insert-and-delete only.
pub struct MessageRepo;

impl MessageRepo {
    /// List all messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MessageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages ORDER BY created_at DESC");
        sqlx::query_as::<_, MessageRow>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, input: &NewMessageRow) -> Result<MessageRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, phone, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MessageRow>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
