//! # Time Utilities
//!
//! Time-of-day helpers for trade lists, using chrono.
//!
//! The browser build has no usable system clock through `std`, so callers pass
//! milliseconds since the epoch (`js_sys::Date::now()`) and get a `NaiveTime` back.

use chrono::{DateTime, NaiveTime, TimeDelta};

/// Convert epoch milliseconds to a UTC time of day.
pub fn time_of_day_from_millis(epoch_millis: i64) -> Result<NaiveTime, Error> {
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|dt| dt.time())
        .ok_or(Error::OutOfRange(epoch_millis))
}

/// Time of day `seconds` before `time`, wrapping around midnight.
pub fn seconds_before(time: NaiveTime, seconds: i64) -> NaiveTime {
    time - TimeDelta::seconds(seconds)
}

/// Format as `HH:MM:SS`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    OutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_from_millis() {
        // 2024-01-01T14:32:15Z
        let time = time_of_day_from_millis(1_704_119_535_000).unwrap();
        assert_eq!(format_time_of_day(time), "14:32:15");
    }

    #[test]
    fn test_seconds_before_wraps_midnight() {
        let time = NaiveTime::from_hms_opt(0, 0, 5).unwrap();
        assert_eq!(format_time_of_day(seconds_before(time, 10)), "23:59:55");
    }
}
