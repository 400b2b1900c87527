//! Checks applied to every field of a task before it reaches the store.
//!
//! The character allowlist on titles is the real guard. The substring
//! denylist only catches the most obvious script and SQL fragments and is not
//! a security boundary.

use super::error::ValidationError;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const MAX_TAGS: usize = 10;
pub const TAG_MAX_LEN: usize = 20;
/// Roughly five years.
pub const MAX_DUE_DAYS_AHEAD: i64 = 1825;

const TITLE_DENYLIST: &[&str] = &[
    "<script",
    "</script>",
    "javascript:",
    "onerror=",
    "onclick=",
    "<iframe",
    "eval(",
    "drop table",
    "delete from",
    "--",
    "/*",
    "*/",
];

const DESCRIPTION_DENYLIST: &[&str] = &[
    "<script",
    "</script>",
    "javascript:",
    "onerror=",
    "onclick=",
    "<iframe",
    "eval(",
    "drop table",
    "delete from",
    "insert into",
    "update ",
    "--",
    "/*",
];

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[a-zA-Z0-9\s.,!?\-()'"]+$"#).expect("valid title regex"));
static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(\d{4})$").expect("valid due date regex")
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-]+$").expect("valid tag regex"));

fn find_denylisted(value: &str, denylist: &[&'static str]) -> Option<&'static str> {
    let lowered = value.to_lowercase();
    denylist.iter().copied().find(|pattern| lowered.contains(pattern))
}

pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let len = title.chars().count();
    if !(1..=TITLE_MAX_LEN).contains(&len) {
        return Err(ValidationError::TitleLength);
    }

    if let Some(pattern) = find_denylisted(title, TITLE_DENYLIST) {
        return Err(ValidationError::DangerousPattern {
            field: "Task title",
            pattern,
        });
    }

    if !TITLE_RE.is_match(title) {
        return Err(ValidationError::InvalidTitleCharacters);
    }

    Ok(())
}

/// Descriptions are optional; an empty string is accepted.
pub fn validate_task_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Ok(());
    }

    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }

    if let Some(pattern) = find_denylisted(description, DESCRIPTION_DENYLIST) {
        return Err(ValidationError::DangerousPattern {
            field: "Description",
            pattern,
        });
    }

    Ok(())
}

/// Validate an optional `MM/DD/YYYY` due date against the local clock
pub fn validate_due_date(due_date: &str) -> Result<(), ValidationError> {
    validate_due_date_at(due_date, Local::now().naive_local())
}

/// Validate an optional `MM/DD/YYYY` due date relative to `now`.
///
/// The date may lie up to one day in the past and at most
/// [`MAX_DUE_DAYS_AHEAD`] days in the future.
pub fn validate_due_date_at(due_date: &str, now: NaiveDateTime) -> Result<(), ValidationError> {
    let due_date = due_date.trim();
    if due_date.is_empty() {
        return Ok(());
    }

    let parsed = parse_due_date(due_date)?;
    let midnight = parsed.and_hms_opt(0, 0, 0).ok_or(ValidationError::ImpossibleDate)?;

    if midnight < now - Duration::days(1) {
        return Err(ValidationError::DateInPast);
    }
    if midnight > now + Duration::days(MAX_DUE_DAYS_AHEAD) {
        return Err(ValidationError::DateTooFar);
    }

    Ok(())
}

/// Parse a due date that has already been trimmed
pub(crate) fn parse_due_date(due_date: &str) -> Result<NaiveDate, ValidationError> {
    let caps = DUE_DATE_RE
        .captures(due_date)
        .ok_or(ValidationError::DateFormat)?;

    let month: u32 = caps[1].parse().map_err(|_| ValidationError::DateFormat)?;
    let day: u32 = caps[2].parse().map_err(|_| ValidationError::DateFormat)?;
    let year: i32 = caps[3].parse().map_err(|_| ValidationError::DateFormat)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::ImpossibleDate)
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::TooManyTags);
    }

    for tag in tags {
        if !(1..=TAG_MAX_LEN).contains(&tag.chars().count()) {
            return Err(ValidationError::TagLength);
        }
        if !TAG_RE.is_match(tag) {
            return Err(ValidationError::InvalidTag(tag.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_title_accepts_plain_text() {
        assert!(validate_task_title("Complete Project").is_ok());
        assert!(validate_task_title("MATH Chapter 6 (problems 6-10), \"due\" soon!").is_ok());
        assert!(validate_task_title("a").is_ok());
        assert!(validate_task_title(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_title_length_limits() {
        assert_eq!(validate_task_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(
            validate_task_title(&"a".repeat(101)),
            Err(ValidationError::TitleLength)
        );
    }

    #[test]
    fn test_title_rejects_denylisted_fragments() {
        assert_eq!(
            validate_task_title("<script>alert(1)</script>"),
            Err(ValidationError::DangerousPattern {
                field: "Task title",
                pattern: "<script",
            })
        );
        assert!(validate_task_title("DROP TABLE tasks").is_err());
        assert!(validate_task_title("Drop Table tasks").is_err());
        assert!(validate_task_title("well -- done").is_err());
    }

    #[test]
    fn test_title_rejects_characters_outside_allowlist() {
        assert_eq!(
            validate_task_title("email me @ noon"),
            Err(ValidationError::InvalidTitleCharacters)
        );
        assert_eq!(
            validate_task_title("50% done"),
            Err(ValidationError::InvalidTitleCharacters)
        );
        assert!(validate_task_title("café").is_err());
    }

    #[test]
    fn test_description_is_optional_and_bounded() {
        assert!(validate_task_description("").is_ok());
        assert!(validate_task_description("Finish the study app").is_ok());
        assert!(validate_task_description(&"x".repeat(500)).is_ok());
        assert_eq!(
            validate_task_description(&"x".repeat(501)),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_description_denylist() {
        assert!(validate_task_description("please UPDATE the notes").is_err());
        assert!(validate_task_description("insert into the binder").is_err());
        // Descriptions have no character allowlist
        assert!(validate_task_description("email me @ noon, 50% done").is_ok());
    }

    #[test]
    fn test_due_date_optional() {
        let now = noon(2026, 3, 10);
        assert!(validate_due_date_at("", now).is_ok());
        assert!(validate_due_date_at("   ", now).is_ok());
    }

    #[test]
    fn test_due_date_format() {
        let now = noon(2026, 3, 10);
        assert_eq!(validate_due_date_at("3/10/2026", now), Err(ValidationError::DateFormat));
        assert_eq!(validate_due_date_at("2026-03-10", now), Err(ValidationError::DateFormat));
        assert_eq!(validate_due_date_at("13/01/2026", now), Err(ValidationError::DateFormat));
        assert_eq!(validate_due_date_at("03/10/20266", now), Err(ValidationError::DateFormat));
        assert_eq!(validate_due_date_at("02/30/2026", now), Err(ValidationError::ImpossibleDate));
        assert!(validate_due_date_at(" 03/10/2026 ", now).is_ok());
    }

    #[test]
    fn test_due_date_window() {
        let now = noon(2026, 3, 10);
        assert!(validate_due_date_at("03/10/2026", now).is_ok());
        assert!(validate_due_date_at("03/11/2026", now).is_ok());
        assert_eq!(validate_due_date_at("03/09/2026", now), Err(ValidationError::DateInPast));
        assert_eq!(validate_due_date_at("01/01/2020", now), Err(ValidationError::DateInPast));
        assert!(validate_due_date_at("03/01/2031", now).is_ok());
        assert_eq!(validate_due_date_at("03/10/2031", now), Err(ValidationError::DateTooFar));
    }

    #[test]
    fn test_due_date_today_against_clock() {
        let today = Local::now().format("%m/%d/%Y").to_string();
        assert!(validate_due_date(&today).is_ok());

        let yesterday = (Local::now() - Duration::days(1)).format("%m/%d/%Y").to_string();
        assert_eq!(validate_due_date(&yesterday), Err(ValidationError::DateInPast));
    }

    #[test]
    fn test_tags() {
        let tags = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert!(validate_tags(&[]).is_ok());
        assert!(validate_tags(&tags(&["math", "exam-2"])).is_ok());
        assert!(validate_tags(&tags(&["a"; 10])).is_ok());
        assert!(validate_tags(&tags(&["t".repeat(20).as_str()])).is_ok());
        assert_eq!(
            validate_tags(&tags(&["a"; 11])),
            Err(ValidationError::TooManyTags)
        );
        assert_eq!(validate_tags(&tags(&[""])), Err(ValidationError::TagLength));
        assert_eq!(
            validate_tags(&tags(&["t".repeat(21).as_str()])),
            Err(ValidationError::TagLength)
        );
        assert_eq!(
            validate_tags(&tags(&["bad_tag"])),
            Err(ValidationError::InvalidTag("bad_tag".to_string()))
        );
    }
}
