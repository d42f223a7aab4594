/// Database primary key type (BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp type used across all crates.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
