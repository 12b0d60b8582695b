//! Wall-clock source for validation: local now, or a pinned instant from the CLI.

use anyhow::anyhow;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Current local wall-clock time, sampled once per invocation.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a pinned clock value. Accepts RFC 3339 (converted to local time),
/// `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD` (both read as local wall clock).
pub fn parse_now(s: &str) -> anyhow::Result<NaiveDateTime> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Local).naive_local());
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(t);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| anyhow!("Invalid --now value {:?}: {}", s, e))
}
