//! Timestamp parsing for tabular sources. Everything is interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::IoError;

/// Naive date-time layouts tried after RFC 3339. `%.f` also accepts no
/// fractional part.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses one timestamp cell.
///
/// Accepts RFC 3339 (any offset, converted to UTC), naive date-times with a
/// space or `T` separator, and bare dates (midnight UTC).
///
/// # Errors
///
/// Returns [`IoError::InvalidTime`] when no layout matches.
pub(crate) fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, IoError> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT)
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    Err(IoError::InvalidTime {
        reason: format!("cannot parse '{text}' as a timestamp"),
    })
}

/// Converts whole seconds since the Unix epoch.
pub(crate) fn from_epoch_seconds(secs: i64) -> Result<DateTime<Utc>, IoError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| out_of_range(secs, "s"))
}

/// Converts milliseconds since the Unix epoch.
pub(crate) fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, IoError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| out_of_range(millis, "ms"))
}

/// Converts microseconds since the Unix epoch.
pub(crate) fn from_epoch_micros(micros: i64) -> Result<DateTime<Utc>, IoError> {
    DateTime::from_timestamp_micros(micros).ok_or_else(|| out_of_range(micros, "us"))
}

/// Converts nanoseconds since the Unix epoch. Every `i64` is representable.
pub(crate) fn from_epoch_nanos(nanos: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(nanos)
}

/// Converts days since the Unix epoch to midnight UTC.
pub(crate) fn from_epoch_days(days: i32) -> Result<DateTime<Utc>, IoError> {
    from_epoch_seconds(i64::from(days) * 86_400)
}

fn out_of_range(value: i64, unit: &str) -> IoError {
    IoError::InvalidTime {
        reason: format!("{value} {unit} since epoch is out of range"),
    }
}
