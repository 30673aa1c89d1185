//! Lenient text-to-number coercion for numeric form inputs.
//!
//! Parsing reads the longest numeric prefix after leading whitespace, so
//! `"12.5kg"` yields `12.5`. Text with no numeric prefix yields `None`, which
//! is stored as-is rather than rejected.
//!
//! The `deserialize_*` helpers apply the same rules to persisted JSON, where a
//! numeric field may hold a number, numeric text or anything else.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

static DECIMAL_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid decimal prefix regex")
});
static INTEGER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer prefix regex"));

/// Parses a decimal number; non-finite results count as invalid.
pub fn parse_number(text: &str) -> Option<f64> {
    let digits = DECIMAL_PREFIX_RE.captures(text)?.get(1)?.as_str();
    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses an integer, truncating any fractional part (`"3.9"` -> `3`).
pub fn parse_integer(text: &str) -> Option<i64> {
    let digits = INTEGER_PREFIX_RE.captures(text)?.get(1)?.as_str();
    digits.parse::<i64>().ok()
}

/// Reads a persisted decimal field: number, numeric text, or `None`.
pub fn deserialize_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_number(&text),
        _ => None,
    })
}

/// Reads a persisted integer field: number (truncated), numeric text, or `None`.
pub fn deserialize_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.is_finite())
                .map(|value| value.trunc() as i64)
        }),
        Value::String(text) => parse_integer(&text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::{deserialize_integer, deserialize_number, parse_integer, parse_number};
    use serde_json::json;

    #[test]
    fn parse_number_reads_numeric_prefix() {
        assert_eq!(parse_number("79.99"), Some(79.99));
        assert_eq!(parse_number("  12.5kg"), Some(12.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-3e2"), Some(-300.0));
    }

    #[test]
    fn parse_number_rejects_non_numeric_text() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("$10"), None);
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn parse_integer_truncates_and_rejects() {
        assert_eq!(parse_integer("45"), Some(45));
        assert_eq!(parse_integer("3.9"), Some(3));
        assert_eq!(parse_integer(" -2 units"), Some(-2));
        assert_eq!(parse_integer("ten"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn deserializers_accept_numbers_and_numeric_text() {
        assert_eq!(deserialize_number(json!(79.99)).unwrap(), Some(79.99));
        assert_eq!(deserialize_number(json!("79.99")).unwrap(), Some(79.99));
        assert_eq!(deserialize_number(json!(null)).unwrap(), None);
        assert_eq!(deserialize_number(json!(true)).unwrap(), None);

        assert_eq!(deserialize_integer(json!(45)).unwrap(), Some(45));
        assert_eq!(deserialize_integer(json!("45")).unwrap(), Some(45));
        assert_eq!(deserialize_integer(json!(3.9)).unwrap(), Some(3));
        assert_eq!(deserialize_integer(json!("n/a")).unwrap(), None);
    }
}
