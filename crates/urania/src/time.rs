//! Julian Day conversion for UTC events (Gregorian calendar, Universal Time).

use chrono::{DateTime, Utc};

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert a UTC event to a Julian Day.
///
/// Fractions of a day are seconds / 86400, taken from the millisecond
/// timestamp.
pub fn julian_day(event: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + event.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Convert a Julian Day back to a UTC event, rounded to the millisecond.
///
/// Returns `None` for non-finite or out-of-range days.
pub fn from_julian_day(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}
