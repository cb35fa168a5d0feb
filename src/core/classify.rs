//! Field value classification.
//!
//! A value is assigned exactly one of the four field types by a prioritized
//! decision list: date, then phone, then email, then text. The ordering is
//! an observable contract; callers rely on date winning over the other
//! detectors, so the checks must not be reordered.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldType;

/// Accepted date formats, tried in order: `25.12.2022` and `2022-12-25`
const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d"];

// Pre-compiled anchored patterns using once_cell
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+7 \d{3} \d{3} \d{2} \d{2}$").unwrap());
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// True iff the whole value parses as a calendar date in one of the two
/// accepted formats. Calendar validity is enforced: `2022-02-30` is
/// rejected because February has no 30th day.
pub fn is_date(value: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

/// True iff the value is a `+7 XXX XXX XX XX` phone number. Group widths
/// and single-space separators are exact; substring matches do not count.
pub fn is_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// True iff the value is an email address with a non-empty domain and a
/// dotted suffix of at least two letters. `test@com` and `test@.com` fail.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Classify a value. Total over all strings: anything that is not a date,
/// phone, or email is text, never an error.
pub fn detect_type(value: &str) -> FieldType {
    if is_date(value) {
        FieldType::Date
    } else if is_phone(value) {
        FieldType::Phone
    } else if is_email(value) {
        FieldType::Email
    } else {
        FieldType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_date_accepts_both_formats() {
        assert!(is_date("25.12.2022"));
        assert!(is_date("2022-12-25"));
    }

    #[test]
    fn test_is_date_rejects_other_separators() {
        assert!(!is_date("25/12/2022"));
        assert!(!is_date("25 12 2022"));
    }

    #[test]
    fn test_is_date_rejects_invalid_calendar_dates() {
        assert!(!is_date("2022-02-30"));
        assert!(!is_date("31.04.2022"));
        assert!(!is_date("00.01.2022"));
    }

    #[test]
    fn test_is_date_rejects_partial_matches() {
        assert!(!is_date("25.12.2022 extra"));
        assert!(!is_date("on 2022-12-25"));
    }

    #[test]
    fn test_is_phone_exact_grouping() {
        assert!(is_phone("+7 123 456 78 90"));
        assert!(!is_phone("1234567890"));
        assert!(!is_phone("+7 1234 567 89 00"));
        assert!(!is_phone("+8 123 456 78 90"));
        assert!(!is_phone("+7 123 456 7890"));
    }

    #[test]
    fn test_is_phone_rejects_substring_matches() {
        assert!(!is_phone("call +7 123 456 78 90"));
        assert!(!is_phone("+7 123 456 78 90 now"));
    }

    #[test]
    fn test_is_email_requires_dotted_suffix() {
        assert!(is_email("test@example.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("test@.com"));
        assert!(!is_email("test@com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("test@example.c"));
    }

    #[test]
    fn test_detect_type_follows_priority_order() {
        assert_eq!(detect_type("25.12.2022"), FieldType::Date);
        assert_eq!(detect_type("+7 123 456 78 90"), FieldType::Phone);
        assert_eq!(detect_type("test@example.com"), FieldType::Email);
        assert_eq!(detect_type("Some random text"), FieldType::Text);
    }

    #[test]
    fn test_detect_type_malformed_input_is_text() {
        assert_eq!(detect_type(""), FieldType::Text);
        assert_eq!(detect_type("2022-02-30"), FieldType::Text);
        assert_eq!(detect_type("test@com"), FieldType::Text);
    }
}
