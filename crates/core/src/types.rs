/// Row identifiers are store-generated UUIDs and opaque to callers.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
