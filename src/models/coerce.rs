//! Lenient numeric coercion for create payloads.
//!
//! The dashboard's forms submit numbers sometimes as JSON numbers and
//! sometimes as strings, so the numeric fields arrive as raw
//! [`serde_json::Value`]s and are coerced here after the presence checks.
//! Decimals go through the number's textual form (serde_json keeps it intact
//! with `arbitrary_precision`), so a cost like `12.50` never exists as an f64.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Coerce a JSON value to an integer. Accepts integral numbers and numeric
/// strings; anything else (including fractional numbers) is `None`.
pub fn as_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Coerce a JSON value to an exact decimal. Numbers are parsed from their
/// literal text; strings are parsed directly.
pub fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_from_number() {
        assert_eq!(as_int(&json!(42)), Some(42));
        assert_eq!(as_int(&json!(0)), Some(0));
    }

    #[test]
    fn int_from_numeric_string() {
        assert_eq!(as_int(&json!("42")), Some(42));
        assert_eq!(as_int(&json!(" 7 ")), Some(7));
    }

    #[test]
    fn int_rejects_garbage_and_fractions() {
        assert_eq!(as_int(&json!("abc")), None);
        assert_eq!(as_int(&json!(10.5)), None);
        assert_eq!(as_int(&json!(null)), None);
        assert_eq!(as_int(&json!(true)), None);
    }

    #[test]
    fn decimal_preserves_trailing_zero() {
        // Parsed from raw JSON text so the literal survives verbatim
        let v: Value = serde_json::from_str("12.50").unwrap();
        assert_eq!(as_decimal(&v).unwrap().to_string(), "12.50");
    }

    #[test]
    fn decimal_from_string() {
        assert_eq!(as_decimal(&json!("0.10")).unwrap().to_string(), "0.10");
        assert_eq!(as_decimal(&json!("1e2")).unwrap().to_string(), "100");
    }

    #[test]
    fn decimal_zero_is_valid() {
        assert_eq!(as_decimal(&json!(0)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert_eq!(as_decimal(&json!("free")), None);
        assert_eq!(as_decimal(&json!([])), None);
    }
}
