/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// All persisted timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A timestamp rendered in the parking lot's civil timezone.
pub type LocalTime = chrono::DateTime<chrono::FixedOffset>;
