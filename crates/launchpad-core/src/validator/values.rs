//! Loose readings of JSON values as submitted by the page editor.
//!
//! Browsers send numbers as either JSON numbers or numeric strings, and
//! optional values as missing, `null` or empty. These helpers give every
//! validator the same interpretation.

use serde_json::Value;

/// Reads a finite number from a JSON number or a numeric string.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// False for `null`, `false`, zero, and empty strings, arrays and objects.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text form of a scalar: strings verbatim, `null` as empty, anything else
/// as its JSON rendering.
pub(crate) fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Like [`to_text`] but treats falsy values as absent.
pub(crate) fn to_optional_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| is_truthy(v)).map(to_text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(4)), Some(4.0));
        assert_eq!(as_number(&json!(2.5)), Some(2.5));
        assert_eq!(as_number(&json!(" 8 ")), Some(8.0));
        assert_eq!(as_number(&json!("eight")), None);
        assert_eq!(as_number(&json!("NaN")), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!(null)), None);
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!("receipt.pdf")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!({"url": "x"})));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!(false)));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("abc")), "abc");
        assert_eq!(to_text(&json!(17)), "17");
        assert_eq!(to_text(&json!(null)), "");
        assert_eq!(to_optional_text(Some(&json!(""))), None);
        assert_eq!(to_optional_text(None), None);
    }
}
