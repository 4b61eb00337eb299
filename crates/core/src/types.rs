/// Server-generated record identifiers are hyphenated UUID v4 strings.
pub type RecordId = String;

/// All timestamps are UTC, rendered as ISO-8601 strings.
pub type IsoTimestamp = String;
