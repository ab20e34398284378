use crate::store::Table;

/// PostgreSQL `undefined_table`.
const PG_UNDEFINED_TABLE: &str = "42P01";

/// Failure reported by a [`DataStore`](crate::DataStore) operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The table does not exist (schema drift). Readers treat this as empty.
    #[error("Table '{table}' does not exist")]
    MissingTable { table: &'static str },

    /// The store could not serve the table (network or service outage).
    #[error("Table '{table}' is unavailable: {reason}")]
    Unavailable { table: &'static str, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable { .. })
    }

    /// Classify a sqlx error raised while touching `table`.
    pub fn from_sqlx(table: Table, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_UNDEFINED_TABLE) {
                return Self::MissingTable {
                    table: table.name(),
                };
            }
        }
        Self::Database(err)
    }
}
