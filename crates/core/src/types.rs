/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendars, SLA levels and tickets are keyed by opaque string identifiers
/// handed to us by the storage layer.
pub type EntityId = String;
