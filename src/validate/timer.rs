//! Allowed pomodoro durations, in whole minutes.

use std::ops::RangeInclusive;

pub const WORK_MINUTES: RangeInclusive<i64> = 15..=60;
pub const SHORT_BREAK_MINUTES: RangeInclusive<i64> = 3..=15;
pub const LONG_BREAK_MINUTES: RangeInclusive<i64> = 10..=45;

pub fn validate_work_timer(minutes: i64) -> bool {
    WORK_MINUTES.contains(&minutes)
}

pub fn validate_short_timer(minutes: i64) -> bool {
    SHORT_BREAK_MINUTES.contains(&minutes)
}

pub fn validate_long_timer(minutes: i64) -> bool {
    LONG_BREAK_MINUTES.contains(&minutes)
}
