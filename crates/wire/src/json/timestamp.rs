//! Timestamp text form
//!
//! RFC 3339 with a numeric offset and automatic sub-second precision:
//! no fraction for whole seconds, otherwise 3, 6 or 9 digits, whichever is
//! the shortest exact form. Every instant therefore survives a round trip.

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Render a timestamp, keeping its offset
///
/// The offset is written to the minute. Encoding rejects offsets with a
/// seconds component before they get here.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Parse an RFC 3339 timestamp (`Z` or numeric offset)
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
}
