//! Calendar date and clock time checks for scheduling a task at a moment.
//!
//! Unlike [`super::task::validate_due_date_at`], these reject any date before
//! today and any time of day that has already passed.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid date regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid time regex"));

fn parse_date(date: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%m/%d/%Y").ok()
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    if !TIME_RE.is_match(time) {
        return None;
    }
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

pub fn validate_date(date: &str) -> bool {
    validate_date_at(date, Local::now().date_naive())
}

/// `MM/DD/YYYY`, a real calendar date, not before `today`
pub fn validate_date_at(date: &str, today: NaiveDate) -> bool {
    parse_date(date).is_some_and(|parsed| parsed >= today)
}

/// `HH:MM` on a 24-hour clock
pub fn validate_time(time: &str) -> bool {
    parse_time(time).is_some()
}

pub fn validate_datetime(date: &str, time: &str) -> bool {
    validate_datetime_at(date, time, Local::now().naive_local())
}

/// Both parts valid, and the combined moment not already behind `now`
pub fn validate_datetime_at(date: &str, time: &str, now: NaiveDateTime) -> bool {
    if !(validate_date_at(date, now.date()) && validate_time(time)) {
        return false;
    }

    let (Some(date), Some(time)) = (parse_date(date), parse_time(time)) else {
        return false;
    };
    let combined = date.and_time(time);

    if combined.date() == now.date() && combined < now {
        return false;
    }

    combined.date() >= now.date()
}
