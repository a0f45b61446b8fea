//! Time utilities: parsing user timestamps, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Parse a user supplied instant.
///
/// Accepts RFC 3339 (`2025-03-01T09:00:00+01:00`, `...Z`) or a local
/// `YYYY-MM-DD HH:MM[:SS]`, resolved in `tz`.
pub fn parse_timestamp_in<Tz: TimeZone>(s: &str, tz: &Tz) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| {
                    AppError::InvalidTimestamp(format!("'{}' does not exist in local time.", s))
                });
        }
    }

    Err(AppError::InvalidTimestamp(format!(
        "Valid occurredAt timestamp is required (got '{}').",
        s
    )))
}

pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp_in(s, &Local)
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    match input {
        Some(s) => Ok(Some(parse_timestamp(s)?)),
        None => Ok(None),
    }
}
