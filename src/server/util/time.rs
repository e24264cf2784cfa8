//! Date parsing for request bodies.
//!
//! Clients send milestone and item dates either as calendar dates from a date picker or
//! as full timestamps. Both are normalised to UTC `NaiveDateTime`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::server::error::{validation::ValidationError, Error};

/// Parses a request date.
///
/// Accepts, in order:
/// - RFC 3339 timestamps (`2026-01-01T09:30:00Z`, `2026-01-01T09:30:00+02:00`), converted to UTC
/// - naive timestamps (`2026-01-01T09:30:00`, optionally with fractional seconds)
/// - calendar dates (`2026-01-01`), interpreted as midnight UTC
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Parsed UTC timestamp
/// - `Err(Error::ValidationError(ValidationError::InvalidDate))` - None of the formats matched
pub fn parse_date(value: &str) -> Result<NaiveDateTime, Error> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc).naive_utc());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(ValidationError::InvalidDate(value.to_string()).into())
}
