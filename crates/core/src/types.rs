/// Database primary key type (bigserial).
pub type DbId = i64;

/// Timestamp type used for all timestamptz columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
