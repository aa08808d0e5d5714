//! JSON syntax highlighting for the editor widget.
//!
//! One left-to-right pass per line producing non-overlapping spans.
//! Strings are consumed as whole tokens, so digits or literals inside
//! them never pick up number/boolean styling. A quoted span is a key
//! when the next non-space character after its closing quote is `:`;
//! if that colon sits on the following line the span renders as a
//! string, a known limitation of per-line scanning.

use iced::advanced::text::highlighter::{Format, Highlighter};
use iced::{Color, Font};
use std::ops::Range;

/// Colors for JSON tokens (dark theme).
mod colors {
    use iced::Color;

    pub const KEY: Color = Color::from_rgb(0.61, 0.86, 1.00); // light blue
    pub const STRING: Color = Color::from_rgb(0.81, 0.57, 0.47); // orange
    pub const NUMBER: Color = Color::from_rgb(0.71, 0.81, 0.66); // light green
    pub const LITERAL: Color = Color::from_rgb(0.34, 0.61, 0.84); // blue, true/false/null
    pub const BRACKET: Color = Color::from_rgb(1.00, 0.84, 0.00); // gold
    pub const PUNCTUATION: Color = Color::from_rgb(0.70, 0.70, 0.70);
    pub const DEFAULT: Color = Color::from_rgb(0.83, 0.83, 0.83);
}

/// Settings for the highlighter. JSON is the only language, so this
/// carries nothing; the type exists for the `Highlighter` API.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighlightSettings;

/// Format for highlighted text.
#[derive(Debug, Clone, Copy)]
pub struct HighlightFormat {
    pub color: Color,
}

impl HighlightFormat {
    pub fn to_format(self, _font: Font) -> Format<Font> {
        Format {
            color: Some(self.color),
            font: None,
        }
    }
}

/// Token kind used internally for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Key,
    Str,
    Number,
    Boolean,
    Null,
    Bracket,
    Punctuation,
    Default,
}

impl TokenKind {
    fn color(self) -> Color {
        match self {
            Self::Key => colors::KEY,
            Self::Str => colors::STRING,
            Self::Number => colors::NUMBER,
            Self::Boolean | Self::Null => colors::LITERAL,
            Self::Bracket => colors::BRACKET,
            Self::Punctuation => colors::PUNCTUATION,
            Self::Default => colors::DEFAULT,
        }
    }
}

/// Tokenizes one line into non-overlapping byte-range spans.
fn scan_line(line: &str) -> Vec<(Range<usize>, TokenKind)> {
    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < len {
        let b = bytes[i];

        if b.is_ascii_whitespace() {
            let start = i;
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            spans.push((start..i, TokenKind::Default));
            continue;
        }

        if b == b'"' {
            let start = i;
            i += 1;
            while i < len {
                if bytes[i] == b'\\' && i + 1 < len {
                    i += 2;
                } else if bytes[i] == b'"' {
                    i += 1;
                    break;
                } else {
                    i += 1;
                }
            }
            let mut next = i;
            while next < len && bytes[next].is_ascii_whitespace() {
                next += 1;
            }
            let kind = if next < len && bytes[next] == b':' {
                TokenKind::Key
            } else {
                TokenKind::Str
            };
            spans.push((start..i, kind));
            continue;
        }

        if matches!(b, b'{' | b'}' | b'[' | b']') {
            spans.push((i..i + 1, TokenKind::Bracket));
            i += 1;
            continue;
        }

        if matches!(b, b',' | b':') {
            spans.push((i..i + 1, TokenKind::Punctuation));
            i += 1;
            continue;
        }

        if b.is_ascii_digit() || (b == b'-' && i + 1 < len && bytes[i + 1].is_ascii_digit()) {
            let start = i;
            i += 1;
            while i < len
                && (bytes[i].is_ascii_digit() || matches!(bytes[i], b'.' | b'e' | b'E' | b'+' | b'-'))
            {
                i += 1;
            }
            spans.push((start..i, TokenKind::Number));
            continue;
        }

        if b.is_ascii_alphabetic() {
            let start = i;
            while i < len && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            let kind = match &line[start..i] {
                "true" | "false" => TokenKind::Boolean,
                "null" => TokenKind::Null,
                _ => TokenKind::Default,
            };
            spans.push((start..i, kind));
            continue;
        }

        // Anything else renders unstyled; advance a whole character so
        // span boundaries stay on UTF-8 boundaries.
        let start = i;
        i += line[i..].chars().next().map(char::len_utf8).unwrap_or(1);
        spans.push((start..i, TokenKind::Default));
    }

    spans
}

/// Syntax highlighter for the JSON editor.
pub struct JsonHighlighter {
    current_line_idx: usize,
}

impl Highlighter for JsonHighlighter {
    type Settings = HighlightSettings;
    type Highlight = HighlightFormat;
    type Iterator<'a>
        = std::vec::IntoIter<(Range<usize>, HighlightFormat)>
    where
        Self: 'a;

    fn new(_settings: &Self::Settings) -> Self {
        Self {
            current_line_idx: 0,
        }
    }

    fn update(&mut self, _new_settings: &Self::Settings) {
        self.current_line_idx = 0;
    }

    fn change_line(&mut self, line: usize) {
        if line < self.current_line_idx {
            self.current_line_idx = line;
        }
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        self.current_line_idx += 1;

        scan_line(line)
            .into_iter()
            .map(|(range, kind)| {
                (
                    range,
                    HighlightFormat {
                        color: kind.color(),
                    },
                )
            })
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_at(line: &str) -> Vec<(String, TokenKind)> {
        scan_line(line)
            .into_iter()
            .map(|(range, kind)| (line[range].to_string(), kind))
            .collect()
    }

    #[test]
    fn test_key_vs_string_value() {
        let tokens = kinds_at(r#""name": "value""#);
        assert_eq!(tokens[0], ("\"name\"".to_string(), TokenKind::Key));
        assert_eq!(tokens[1], (":".to_string(), TokenKind::Punctuation));
        assert_eq!(tokens[3], ("\"value\"".to_string(), TokenKind::Str));
    }

    #[test]
    fn test_key_detection_skips_spaces_before_colon() {
        let tokens = kinds_at(r#""name"  : 1"#);
        assert_eq!(tokens[0].1, TokenKind::Key);
    }

    #[test]
    fn test_digits_inside_strings_are_not_numbers() {
        let tokens = kinds_at(r#""v": "3 items""#);
        assert!(tokens.iter().all(|(_, k)| *k != TokenKind::Number));
    }

    #[test]
    fn test_number_forms() {
        for text in ["0", "-12", "3.25", "1e9", "6.02e-23"] {
            let tokens = kinds_at(text);
            assert_eq!(tokens, vec![(text.to_string(), TokenKind::Number)], "{text}");
        }
    }

    #[test]
    fn test_literals() {
        let tokens = kinds_at("[true, false, null]");
        let kinds: Vec<TokenKind> = tokens.iter().map(|(_, k)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Bracket,
                TokenKind::Boolean,
                TokenKind::Punctuation,
                TokenKind::Default, // space
                TokenKind::Boolean,
                TokenKind::Punctuation,
                TokenKind::Default, // space
                TokenKind::Null,
                TokenKind::Bracket,
            ]
        );
    }

    #[test]
    fn test_escaped_quote_stays_inside_the_string() {
        let tokens = kinds_at(r#""say \"hi\"": 1"#);
        assert_eq!(tokens[0], (r#""say \"hi\"""#.to_string(), TokenKind::Key));
    }

    #[test]
    fn test_spans_are_contiguous_and_non_overlapping() {
        let line = r#"  {"a": [1, true, "x"], "b": null}"#;
        let spans = scan_line(line);
        let mut end = 0;
        for (range, _) in &spans {
            assert_eq!(range.start, end);
            end = range.end;
        }
        assert_eq!(end, line.len());
    }

    #[test]
    fn test_unterminated_string_runs_to_end_of_line() {
        let tokens = kinds_at(r#""unclosed value"#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1, TokenKind::Str);
    }

    #[test]
    fn test_non_ascii_outside_strings_is_unstyled() {
        let spans = scan_line("é");
        assert_eq!(spans, vec![(0..2, TokenKind::Default)]);
    }
}
