//! Conversion between UTC timestamps and CF `seconds since 1970-01-01T00:00:00Z`.

use chrono::{DateTime, Utc};

use crate::error::CfError;

/// Units string of the CF time coordinate.
pub const TIME_UNITS: &str = "seconds since 1970-01-01T00:00:00Z";

const NANOS_PER_SECOND: f64 = 1e9;

/// Converts timestamps to floating-point seconds since the UNIX epoch.
///
/// Sub-second precision is kept as the fractional part; values are not
/// truncated to whole seconds. Leap seconds are not counted: an instant inside
/// a leap second maps to the last nanosecond of the preceding second.
pub fn datetimes_to_unix(times: &[DateTime<Utc>]) -> Vec<f64> {
    times
        .iter()
        .map(|t| {
            let nanos = t.timestamp_subsec_nanos().min(999_999_999);
            t.timestamp() as f64 + f64::from(nanos) / NANOS_PER_SECOND
        })
        .collect()
}

/// Converts seconds since the UNIX epoch back to timestamps.
///
/// Values are resolved to the nearest nanosecond.
///
/// # Errors
///
/// Returns [`CfError::InvalidTime`] if a value is NaN, infinite, or outside
/// the range chrono can represent.
pub fn unix_to_datetimes(seconds: &[f64]) -> Result<Vec<DateTime<Utc>>, CfError> {
    seconds
        .iter()
        .map(|&s| {
            if !s.is_finite() {
                return Err(CfError::InvalidTime {
                    reason: format!("non-finite epoch seconds: {s}"),
                });
            }
            let whole = s.floor();
            let mut secs = whole as i64;
            let mut nanos = ((s - whole) * NANOS_PER_SECOND).round() as u32;
            if nanos >= 1_000_000_000 {
                secs += 1;
                nanos -= 1_000_000_000;
            }
            DateTime::from_timestamp(secs, nanos).ok_or_else(|| CfError::InvalidTime {
                reason: format!("epoch seconds out of range: {s}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Timelike};

    use super::*;

    #[test]
    fn hourly_times_to_seconds() {
        let t0 = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let times = vec![
            t0,
            t0 + chrono::Duration::hours(1),
            t0 + chrono::Duration::hours(2),
        ];
        let secs = datetimes_to_unix(&times);
        assert_eq!(secs, vec![946_684_800.0, 946_688_400.0, 946_692_000.0]);
    }

    #[test]
    fn order_and_duplicates_kept() {
        let a = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap();
        let secs = datetimes_to_unix(&[a, b, a]);
        assert!(secs[0] > secs[1]);
        assert_eq!(secs[0], secs[2]);
    }

    #[test]
    fn fractional_seconds_kept() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_abs_diff_eq!(datetimes_to_unix(&[t])[0], 1.25, epsilon = 1e-9);
    }

    #[test]
    fn pre_epoch_seconds_are_negative() {
        let t = Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 30).unwrap();
        assert_eq!(datetimes_to_unix(&[t]), vec![-30.0]);
    }

    #[test]
    fn inverse_recovers_timestamps() {
        let t0 = Utc.with_ymd_and_hms(2015, 3, 14, 9, 26, 53).unwrap();
        let times = vec![t0, t0 + chrono::Duration::milliseconds(500)];
        let back = unix_to_datetimes(&datetimes_to_unix(&times)).unwrap();
        assert_eq!(back[0], times[0]);
        assert_eq!(back[1].second(), 53);
        assert_abs_diff_eq!(
            f64::from(back[1].nanosecond()),
            5e8,
            epsilon = 1e3
        );
    }

    #[test]
    fn inverse_uses_seconds_not_deciseconds() {
        let back = unix_to_datetimes(&[86_400.0]).unwrap();
        assert_eq!(back[0], Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn inverse_rejects_non_finite() {
        let err = unix_to_datetimes(&[f64::NAN]).unwrap_err();
        assert!(matches!(err, CfError::InvalidTime { .. }));
        assert!(unix_to_datetimes(&[f64::INFINITY]).is_err());
        assert!(unix_to_datetimes(&[1e300]).is_err());
    }
}
