//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

use crate::Error;

/// DateTime in UTC, the only timezone the API speaks.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime for now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with second precision: `2022-03-01T08:12:34Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a RFC 3339 / ISO 8601 string into a DateTime.
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&Utc))
        .map_err(|e| {
            Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e)
        })
}
