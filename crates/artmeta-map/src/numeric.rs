//! Loose numeric coercion with an explicit absent outcome.

use serde_json::Value;

/// Parse a loosely-typed value to a finite number, or `None`.
///
/// Textual numbers like `"300"` convert; empty strings, non-numeric text,
/// nulls, and non-scalar shapes are absent, never zero and never NaN.
#[must_use]
pub fn parse_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textual_numbers_convert() {
        assert_eq!(parse_number(Some(&Value::from("300"))), Some(300.0));
        assert_eq!(parse_number(Some(&Value::from(" 12.5 "))), Some(12.5));
        assert_eq!(parse_number(Some(&Value::from(150))), Some(150.0));
    }

    #[test]
    fn unparsable_values_are_absent_not_zero() {
        assert_eq!(parse_number(Some(&Value::from("abc"))), None);
        assert_eq!(parse_number(Some(&Value::from(""))), None);
        assert_eq!(parse_number(Some(&Value::Null)), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn non_finite_values_are_absent() {
        assert_eq!(parse_number(Some(&Value::from("inf"))), None);
        assert_eq!(parse_number(Some(&Value::from("NaN"))), None);
    }
}
