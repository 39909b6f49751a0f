/// All primary keys are server-generated UUIDs (`gen_random_uuid()`).
pub type DbId = uuid::Uuid;

/// Creation timestamps are stored as `TIMESTAMP` without time zone.
pub type Timestamp = chrono::NaiveDateTime;
