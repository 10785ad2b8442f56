/// All template, section and question ids are UUIDv4, assigned by the store
/// (templates) or at entity construction (sections, questions).
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
