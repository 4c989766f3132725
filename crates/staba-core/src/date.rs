//! Date parsing and display formatting.

use std::fmt::Write;

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, Utc,
    format::{Item, StrftimeItems},
};

/// Default display pattern, the medium `ja-JP` style (`2024/03/01`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Parse an ISO-8601 date or timestamp.
///
/// Accepts RFC 3339 timestamps, naive date-times and plain dates. Values
/// without an offset are read as UTC.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Check that a strftime pattern contains no invalid specifiers.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats post dates for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    /// Create a formatter with a strftime pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The strftime pattern in use.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format an ISO date string.
    ///
    /// Returns the input unchanged when it cannot be parsed or formatted.
    pub fn format(&self, iso: &str) -> String {
        let Some(date) = parse_date(iso) else {
            return iso.to_string();
        };

        let mut out = String::new();
        match write!(out, "{}", date.format(&self.pattern)) {
            Ok(()) => out,
            Err(_) => iso.to_string(),
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date("2024-03-01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let date = parse_date("2024-03-01T09:00:00+09:00").unwrap();
        assert_eq!(date.day(), 1);
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert!(parse_date("2024-03-01T09:30:00").is_some());
        assert!(parse_date("2024-03-01T09:30:00.250").is_some());
        assert!(parse_date("2024-03-01T09:30").is_some());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date("").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn test_format_default_pattern() {
        let formatter = DateFormatter::default();
        assert_eq!(formatter.format("2024-03-01"), "2024/03/01");
        assert_eq!(formatter.format("2024-03-01T23:00:00Z"), "2024/03/01");
    }

    #[test]
    fn test_format_custom_pattern() {
        let formatter = DateFormatter::new("%b %-d, %Y");
        assert_eq!(formatter.format("2024-03-01"), "Mar 1, 2024");
    }

    #[test]
    fn test_format_unparsable_returns_input() {
        let formatter = DateFormatter::default();
        assert_eq!(formatter.format("spring 2024"), "spring 2024");
        assert_eq!(formatter.format(""), "");
    }

    #[test]
    fn test_format_bad_pattern_returns_input() {
        let formatter = DateFormatter::new("%Q");
        assert_eq!(formatter.format("2024-03-01"), "2024-03-01");
    }

    #[test]
    fn test_is_valid_pattern() {
        assert!(is_valid_pattern("%Y/%m/%d"));
        assert!(!is_valid_pattern("%Q"));
        assert!(!is_valid_pattern(""));
    }
}
