//! Server-assigned field generation.
//!
//! The validator calls these explicitly when turning a create payload into a
//! canonical record; nothing else is allowed to produce `id` or `created_at`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::{IsoTimestamp, RecordId};

/// A fresh random identifier, unique across all records of every kind.
pub fn new_unique_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

/// The current UTC time as ISO-8601 with microsecond precision.
pub fn now_utc_iso() -> IsoTimestamp {
    format_iso(Utc::now())
}

/// Render a UTC instant the same way [`now_utc_iso`] does.
pub fn format_iso(at: DateTime<Utc>) -> IsoTimestamp {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
