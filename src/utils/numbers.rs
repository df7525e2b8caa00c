//! Lenient numeric parsing
//!
//! Legacy values such as `2.5kg` or ` 3 ` still carry a usable number at the
//! front; these helpers read that prefix and ignore the rest.

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("static float pattern")
});

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("static integer pattern"));

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse the leading decimal number of `text`.
///
/// Integral values come back as JSON integers so `5` stays `5` rather than
/// `5.0`.
pub fn parse_number_prefix(text: &str) -> Option<serde_json::Number> {
    let caps = FLOAT_PREFIX.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(serde_json::Number::from(value as i64))
    } else {
        serde_json::Number::from_f64(value)
    }
}

/// Parse the leading base-10 integer of `text`
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    INT_PREFIX.captures(text)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_prefix() {
        assert_eq!(parse_number_prefix("2.5"), serde_json::Number::from_f64(2.5));
        assert_eq!(parse_number_prefix("2.5kg"), serde_json::Number::from_f64(2.5));
        assert_eq!(parse_number_prefix(" 12 "), Some(serde_json::Number::from(12)));
        assert_eq!(parse_number_prefix(".5"), serde_json::Number::from_f64(0.5));
        assert_eq!(parse_number_prefix("heavy"), None);
        assert_eq!(parse_number_prefix(""), None);
    }

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("3"), Some(3));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix(" -2 boxes"), Some(-2));
        assert_eq!(parse_int_prefix("x3"), None);
    }
}
