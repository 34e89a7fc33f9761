//! Minute-granularity time helpers shared by the calendar and SLA clock.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Seconds per minute.
pub const SECS_PER_MINUTE: i64 = 60;
/// Minutes per hour.
pub const MINUTES_PER_HOUR: i64 = 60;
/// Minutes per day.
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
/// Minutes per week.
pub const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// Whole minutes from `from` to `to`, rounded towards negative infinity.
///
/// Negative when `to` precedes `from`; callers that need a non-negative
/// count clamp the result themselves.
pub fn whole_minutes(from: Timestamp, to: Timestamp) -> i64 {
    (to - from).num_seconds().div_euclid(SECS_PER_MINUTE)
}

/// `instant + minutes`, saturating at the ends of the representable range.
pub fn add_minutes(instant: Timestamp, minutes: i64) -> Timestamp {
    Duration::try_minutes(minutes)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if minutes < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Combine a calendar date with a wall-clock time as a UTC instant.
pub fn at_time_of_day(date: NaiveDate, time: NaiveTime) -> Timestamp {
    let naive = date.and_time(time);
    Utc.from_utc_datetime(&naive)
}

/// Midnight at the start of `instant`'s day.
pub fn start_of_day(instant: Timestamp) -> Timestamp {
    at_time_of_day(instant.date_naive(), NaiveTime::MIN)
}

/// Midnight at the start of the day after `instant`'s day.
///
/// Saturates at the latest representable instant on the final day.
pub fn start_of_next_day(instant: Timestamp) -> Timestamp {
    start_of_day(instant)
        .checked_add_signed(Duration::days(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
