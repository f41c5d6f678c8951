//! Bounded excerpt of the failing line with the offending character marked.

use std::ops::Range;

use serde::Serialize;

/// Characters shown on each side of the error by default
pub const DEFAULT_RADIUS: usize = 30;

/// A windowed slice of one line, split around the offending character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub before: String,
    /// Empty when the error sits past the last character of the line
    pub error_char: String,
    pub after: String,
}

impl Snippet {
    /// True when a character is marked
    pub fn has_marker(&self) -> bool {
        !self.error_char.is_empty()
    }

    /// The full windowed slice, marker included
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before, self.error_char, self.after)
    }
}

/// Character range of `line_text` shown for a 1-indexed `column`
pub fn window(line_text: &str, column: usize, radius: usize) -> Range<usize> {
    let len = line_text.chars().count();
    let end = len.min(column + radius);
    let start = column.saturating_sub(radius + 2).min(end);
    start..end
}

/// Build a Snippet around `column` (1-indexed) of `line_text`
pub fn highlight(line_text: &str, column: usize, radius: usize) -> Snippet {
    let range = window(line_text, column, radius);
    let slice: Vec<char> = line_text
        .chars()
        .skip(range.start)
        .take(range.end - range.start)
        .collect();

    let error_index = column.saturating_sub(range.start + 1);
    if column > range.start && error_index < slice.len() {
        Snippet {
            before: slice[..error_index].iter().collect(),
            error_char: slice[error_index].to_string(),
            after: slice[error_index + 1..].iter().collect(),
        }
    } else {
        Snippet {
            before: slice.into_iter().collect(),
            error_char: String::new(),
            after: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_offending_character() {
        let snippet = highlight("{'a': 1}", 2, DEFAULT_RADIUS);
        assert_eq!(snippet.before, "{");
        assert_eq!(snippet.error_char, "'");
        assert_eq!(snippet.after, "a': 1}");
        assert!(snippet.has_marker());
    }

    #[test]
    fn test_end_of_line_has_no_marker() {
        let line = r#"{"a": "unterminated}"#;
        let snippet = highlight(line, line.len() + 1, DEFAULT_RADIUS);
        assert_eq!(snippet.before, line);
        assert_eq!(snippet.error_char, "");
        assert_eq!(snippet.after, "");
        assert!(!snippet.has_marker());
    }

    #[test]
    fn test_long_line_is_windowed() {
        let line = format!("{}X{}", "a".repeat(100), "b".repeat(100));
        let snippet = highlight(&line, 101, 10);
        assert_eq!(snippet.error_char, "X");
        // Window opens radius + 2 characters before the column
        assert_eq!(snippet.before, "a".repeat(11));
        assert_eq!(snippet.after, "b".repeat(10));
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(window("abcdef", 1, 30), 0..6);
        assert_eq!(window("abcdef", 7, 30), 0..6);
        assert_eq!(window(&"x".repeat(100), 50, 5), 43..55);
        assert_eq!(window("", 1, 30), 0..0);
    }

    #[test]
    fn test_multibyte_characters_are_not_split() {
        let snippet = highlight("ключ: 'значение'", 7, DEFAULT_RADIUS);
        assert_eq!(snippet.before, "ключ: ");
        assert_eq!(snippet.error_char, "'");
        assert_eq!(snippet.text(), "ключ: 'значение'");
    }

    #[test]
    fn test_zero_radius() {
        let snippet = highlight("abc", 2, 0);
        assert_eq!(snippet.text(), "ab");
        assert_eq!(snippet.error_char, "b");
    }
}
