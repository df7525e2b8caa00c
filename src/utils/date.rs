//! Date normalization
//!
//! Turns whatever date text a legacy request carries into `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static CANONICAL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

/// Date-time layouts tried after RFC 3339 and RFC 2822
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

/// Date-only layouts. Slashes read month first, dots read day first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Current UTC date as `YYYY-MM-DD`
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Normalize `input` to `YYYY-MM-DD`.
///
/// Text already in that shape is returned untouched. Unparseable text falls
/// back to today's date and is logged; this never fails.
pub fn format_date_to_yyyymmdd(input: &str) -> String {
    if CANONICAL_DATE.is_match(input) {
        return input.to_string();
    }

    match parse_date(input.trim()) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            warn!("Invalid date {:?}, falling back to today", input);
            today()
        }
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_passthrough() {
        assert_eq!(format_date_to_yyyymmdd("2024-03-05"), "2024-03-05");
    }

    #[test]
    fn test_us_style_date() {
        assert_eq!(format_date_to_yyyymmdd("03/05/2024"), "2024-03-05");
    }

    #[test]
    fn test_iso_date_time() {
        assert_eq!(format_date_to_yyyymmdd("2024-03-05T00:00:00"), "2024-03-05");
        assert_eq!(format_date_to_yyyymmdd("2024-03-05T23:10:00+01:00"), "2024-03-05");
    }

    #[test]
    fn test_unpadded_and_dotted() {
        assert_eq!(format_date_to_yyyymmdd("2024-3-5"), "2024-03-05");
        assert_eq!(format_date_to_yyyymmdd("5.3.2024"), "2024-03-05");
    }

    #[test]
    fn test_invalid_falls_back_to_today() {
        let result = format_date_to_yyyymmdd("not-a-date");
        assert!(CANONICAL_DATE.is_match(&result));
        assert!(NaiveDate::parse_from_str(&result, "%Y-%m-%d").is_ok());
    }
}
