//! Offset to line/column resolution.

use serde::Serialize;

/// A 1-indexed location in the source text plus the text of its line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// The full line containing the offset, without its terminator
    pub line_text: String,
}

/// Resolve a character offset into a Position.
///
/// Lines are split on `'\n'`; each line counts its length plus one for the
/// terminator. Offsets at or past the end of the text clamp to the last line
/// with the column one past its final character.
pub fn resolve(text: &str, offset: usize) -> Position {
    let mut line_start = 0;
    let mut last = (1, "");

    for (index, line) in text.split('\n').enumerate() {
        let line_len = line.chars().count();
        if line_start + line_len + 1 > offset {
            return Position {
                line: index + 1,
                column: offset - line_start + 1,
                line_text: line.to_string(),
            };
        }
        line_start += line_len + 1;
        last = (index + 1, line);
    }

    let (line, line_text) = last;
    Position {
        line,
        column: line_text.chars().count() + 1,
        line_text: line_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character() {
        let pos = resolve("{'a': 1}", 0);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.line_text, "{'a': 1}");
    }

    #[test]
    fn test_second_line() {
        let text = "{\n  \"a\": 1,\n}";
        // Offset 4 is the opening quote of the key
        let pos = resolve(text, 4);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.line_text, "  \"a\": 1,");
    }

    #[test]
    fn test_offset_on_line_break_is_end_of_line() {
        let pos = resolve("ab\ncd", 2);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_end_of_input_clamps_to_last_line() {
        let text = "{\n\"a\": 1";
        let pos = resolve(text, text.chars().count());
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, "\"a\": 1".len() + 1);
        assert_eq!(pos.line_text, "\"a\": 1");
    }

    #[test]
    fn test_past_end_clamps() {
        let pos = resolve("abc", 99);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 4);
    }

    #[test]
    fn test_empty_text() {
        let pos = resolve("", 0);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.line_text, "");
    }

    #[test]
    fn test_trailing_newline_gives_empty_last_line() {
        let pos = resolve("[1,\n", 4);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert!(pos.line_text.is_empty());
    }

    #[test]
    fn test_columns_count_characters() {
        // "ü" is one character but two bytes
        let pos = resolve("\"ü\" x", 4);
        assert_eq!(pos.column, 5);
    }
}
