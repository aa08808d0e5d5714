//! Document operations.
//!
//! Parsing, formatting, and minification are delegated entirely to
//! `serde_json`; these wrappers exist so every caller goes through one
//! error type and one set of serialization choices (2-space indent,
//! non-ASCII preserved).

use serde_json::Value;

/// Errors from document operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses `text` into a JSON value.
pub fn parse(text: &str) -> Result<Value, DocumentError> {
    Ok(serde_json::from_str(text)?)
}

/// Checks that `text` is valid JSON without keeping the value.
pub fn validate(text: &str) -> Result<(), DocumentError> {
    parse(text).map(|_| ())
}

/// Pretty-prints `text` with 2-space indentation.
///
/// The buffer is replaced wholesale by the caller, so the text must
/// parse; invalid input returns the parser's error untouched.
pub fn format(text: &str) -> Result<String, DocumentError> {
    let value = parse(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Re-serializes `text` with no insignificant whitespace.
pub fn minify(text: &str) -> Result<String, DocumentError> {
    let value = parse(text)?;
    Ok(serde_json::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_two_space_indent() {
        let formatted = format("{\"a\":1}").unwrap();
        assert_eq!(formatted, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_format_preserves_key_order() {
        let formatted = format(r#"{"z":1,"a":2}"#).unwrap();
        assert!(formatted.find("\"z\"").unwrap() < formatted.find("\"a\"").unwrap());
    }

    #[test]
    fn test_format_preserves_non_ascii() {
        let formatted = format(r#"{"name":"café"}"#).unwrap();
        assert!(formatted.contains("café"));
    }

    #[test]
    fn test_minify_removes_whitespace() {
        let minified = minify("{\n  \"a\": 1,\n  \"b\": [1, 2]\n}").unwrap();
        assert_eq!(minified, r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert!(parse("not json").is_err());
        assert!(validate("{\"a\":").is_err());
        assert!(format("[1, 2,]").is_err());
        assert!(minify("").is_err());
    }

    #[test]
    fn test_validate_accepts_any_json_value() {
        for text in ["null", "true", "3.5", "\"hi\"", "[]", "{}"] {
            assert!(validate(text).is_ok(), "{text} should be valid");
        }
    }

    // Strategy for arbitrary JSON values, a few levels deep.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,8}", inner), 0..6).prop_map(|entries| {
                    Value::Object(entries.into_iter().collect())
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_format_is_structure_preserving(value in json_value()) {
            let text = serde_json::to_string(&value).unwrap();
            let formatted = format(&text).unwrap();
            prop_assert_eq!(parse(&formatted).unwrap(), parse(&text).unwrap());
        }

        #[test]
        fn prop_minify_after_format_round_trips(value in json_value()) {
            let text = serde_json::to_string(&value).unwrap();
            let minified = minify(&format(&text).unwrap()).unwrap();
            prop_assert_eq!(parse(&minified).unwrap(), value);
        }
    }
}
