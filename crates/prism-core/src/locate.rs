//! Best-effort mapping from a tree path back to a text position.
//!
//! The live text and the parsed structure are not kept in lockstep, so
//! this works in two independent passes:
//!
//! 1. a structure-aware pass re-parses the document and computes the
//!    *occurrence index* of the target key: how many same-named keys a
//!    depth-first walk meets strictly before the node whose accumulated
//!    path equals the target;
//! 2. a text-aware pass sweeps the raw buffer line by line for quoted
//!    occurrences of the key name and picks the Nth one.
//!
//! Same-named keys are therefore disambiguated by structural path, not
//! by first lexical match. If the buffer was hand-edited since the last
//! parse the mapping can point at the wrong occurrence; every failure
//! here degrades to `None` and the UI simply does not highlight.

use regex::Regex;
use serde_json::Value;

/// One segment of a tree path such as `items[2].name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A located key, in character columns, quotes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpan {
    /// Zero-based line.
    pub line: usize,
    /// Column of the opening quote.
    pub start: usize,
    /// Column one past the closing quote.
    pub end: usize,
}

/// Parses a dotted/bracketed path string into segments.
///
/// Returns `None` for malformed paths (empty segments, unclosed or
/// non-numeric brackets). Keys that themselves contain `.` or `[` are
/// not representable; that ambiguity is inherent to the path syntax.
pub fn parse_path(path: &str) -> Option<Vec<PathSegment>> {
    if path.is_empty() {
        return None;
    }
    let mut segments = Vec::new();
    let mut rest = path;
    loop {
        if let Some(after) = rest.strip_prefix('[') {
            let close = after.find(']')?;
            let index: usize = after[..close].parse().ok()?;
            segments.push(PathSegment::Index(index));
            rest = &after[close + 1..];
        } else {
            let end = rest.find(['.', '[']).unwrap_or(rest.len());
            if end == 0 {
                return None;
            }
            segments.push(PathSegment::Key(rest[..end].to_string()));
            rest = &rest[end..];
        }
        if rest.is_empty() {
            return Some(segments);
        }
        if let Some(after) = rest.strip_prefix('.') {
            if after.is_empty() || after.starts_with('[') || after.starts_with('.') {
                return None;
            }
            rest = after;
        }
    }
}

/// Finds the text span of the key a path points at.
///
/// Only object-key targets are locatable; index-terminated paths return
/// `None` by design, as do paths that don't resolve in the parsed text.
pub fn locate(text: &str, path: &str) -> Option<KeySpan> {
    let Some(segments) = parse_path(path) else {
        tracing::debug!(path, "locate: malformed path");
        return None;
    };
    let key = match segments.last() {
        Some(PathSegment::Key(key)) => key.clone(),
        _ => {
            tracing::debug!(path, "locate: index-terminated path is not locatable");
            return None;
        }
    };
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(path, %err, "locate: buffer does not parse");
            return None;
        }
    };

    let nth = occurrence_index(&value, &segments, &key)?;
    scan_key_occurrences(text, &key).into_iter().nth(nth)
}

/// Depth-first occurrence count of `key` strictly before the target
/// path. Objects are walked in declaration order, each key checked
/// before recursing into its value, arrays by index.
fn occurrence_index(root: &Value, target: &[PathSegment], key: &str) -> Option<usize> {
    let mut current = Vec::new();
    let mut count = 0;
    walk(root, &mut current, target, key, &mut count)
}

fn walk(
    value: &Value,
    current: &mut Vec<PathSegment>,
    target: &[PathSegment],
    key: &str,
    count: &mut usize,
) -> Option<usize> {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                current.push(PathSegment::Key(name.clone()));
                if name == key {
                    if current.as_slice() == target {
                        return Some(*count);
                    }
                    *count += 1;
                }
                if let Some(found) = walk(child, current, target, key, count) {
                    return Some(found);
                }
                current.pop();
            }
            None
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                current.push(PathSegment::Index(i));
                if let Some(found) = walk(child, current, target, key, count) {
                    return Some(found);
                }
                current.pop();
            }
            None
        }
        _ => None,
    }
}

/// Every textual occurrence of `"key"` in order, one sweep per line.
/// Purely lexical: a string *value* spelled like the key matches too.
fn scan_key_occurrences(text: &str, key: &str) -> Vec<KeySpan> {
    let pattern = match Regex::new(&format!("\"{}\"", regex::escape(key))) {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::debug!(key, %err, "locate: key pattern failed to build");
            return Vec::new();
        }
    };

    let mut spans = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        for m in pattern.find_iter(line) {
            let start = line[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            spans.push(KeySpan {
                line: line_no,
                start,
                end,
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_nested_paths() {
        assert_eq!(
            parse_path("user.address.city").unwrap(),
            vec![
                PathSegment::Key("user".into()),
                PathSegment::Key("address".into()),
                PathSegment::Key("city".into()),
            ]
        );
        assert_eq!(
            parse_path("items[2].name").unwrap(),
            vec![
                PathSegment::Key("items".into()),
                PathSegment::Index(2),
                PathSegment::Key("name".into()),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        assert!(parse_path("").is_none());
        assert!(parse_path("a..b").is_none());
        assert!(parse_path("a.").is_none());
        assert!(parse_path("items[x]").is_none());
        assert!(parse_path("items[2").is_none());
    }

    #[test]
    fn test_same_named_keys_resolve_by_structure() {
        // Clicking b.x must highlight the second "x", not the first.
        let text = r#"{"a":{"x":1},"b":{"x":2}}"#;
        let span = locate(text, "b.x").unwrap();
        let first = text.find("\"x\"").unwrap();
        let second = text[first + 1..].find("\"x\"").unwrap() + first + 1;
        assert_eq!(span.line, 0);
        assert_eq!(span.start, second);
        assert_eq!(span.end, second + 3);
    }

    #[test]
    fn test_span_covers_quotes_on_the_right_line() {
        let text = "{\n  \"alpha\": 1,\n  \"beta\": 2\n}";
        let span = locate(text, "beta").unwrap();
        assert_eq!(span.line, 2);
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 8);
    }

    #[test]
    fn test_key_inside_array_element() {
        let text = r#"{"items":[{"name":"a"},{"name":"b"}]}"#;
        let span = locate(text, "items[1].name").unwrap();
        // Second occurrence of "name".
        let first = text.find("\"name\"").unwrap();
        assert!(span.start > first);
    }

    #[test]
    fn test_key_match_in_earlier_sibling_subtree_counts() {
        // The walk dives into a's subtree before reaching the top-level
        // "name", so the nested one occupies occurrence 0.
        let text = r#"{"a":{"name":"inner"},"name":"outer"}"#;
        let span = locate(text, "name").unwrap();
        let first = text.find("\"name\"").unwrap();
        let second = text[first + 1..].find("\"name\"").unwrap() + first + 1;
        assert_eq!(span.start, second);
        let span = locate(text, "a.name").unwrap();
        assert_eq!(span.start, first);
    }

    #[test]
    fn test_index_terminated_paths_are_not_locatable() {
        let text = r#"{"items":[1,2,3]}"#;
        assert!(locate(text, "items[1]").is_none());
    }

    #[test]
    fn test_unknown_path_and_unparsable_text() {
        assert!(locate(r#"{"a":1}"#, "b").is_none());
        assert!(locate("not json", "a").is_none());
    }

    #[test]
    fn test_key_with_regex_metacharacters() {
        let text = r#"{"price ($)": 3}"#;
        let span = locate(text, "price ($)").unwrap();
        assert_eq!(span.start, 1);
    }

    #[test]
    fn test_columns_are_characters_not_bytes() {
        let text = "{\"café\": {\"x\": 1}, \"x\": 2}";
        let span = locate(text, "café.x").unwrap();
        // Byte offsets would land one past this with the two-byte é.
        assert_eq!(span.start, text.chars().take_while(|&c| c != 'x').count() - 1);
    }
}
