//! Strict parsing and structured parse failures.
//!
//! Wraps `serde_json` as the strict grammar and converts its line/column
//! report into a character offset into the source text.

use serde::Serialize;
use serde_json::Value;
use serde_json::error::Category;

/// The first structural error found by the strict parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    /// Zero-based character index of the failure, never past the end of the text
    pub offset: usize,
    pub message: String,
}

impl ParseFailure {
    /// Create a ParseFailure from a serde_json error
    pub fn from_serde_error(e: &serde_json::Error, contents: &str) -> Self {
        ParseFailure {
            offset: char_offset(e, contents),
            message: describe(e),
        }
    }
}

/// Parse `text` with the strict grammar
pub fn parse_strict(text: &str) -> Result<Value, ParseFailure> {
    serde_json::from_str::<Value>(text).map_err(|e| {
        let failure = ParseFailure::from_serde_error(&e, text);
        tracing::debug!(offset = failure.offset, message = %failure.message, "strict parse failed");
        failure
    })
}

/// Friendly message without serde_json's trailing location
fn describe(e: &serde_json::Error) -> String {
    match e.classify() {
        Category::Io => format!("I/O error: {}", e),
        Category::Syntax | Category::Eof => {
            // serde_json format: "message at line X column Y"
            let full = e.to_string();
            match full.find(" at line ") {
                Some(idx) => full[..idx].to_string(),
                None => full,
            }
        }
        Category::Data => format!("Data error: {}", e),
    }
}

/// Convert serde_json's (line, byte column) into a character offset.
///
/// serde_json points its column at the offending byte (1-based). Errors at end
/// of input are anchored past the last character so the resolved position lands
/// at the end of the final line. Column 0 means the error follows a line break
/// serde has already consumed, so the break itself is the offending character.
fn char_offset(e: &serde_json::Error, contents: &str) -> usize {
    if e.classify() == Category::Eof {
        return contents.chars().count();
    }

    let line_start: usize = contents
        .split_inclusive('\n')
        .take(e.line().saturating_sub(1))
        .map(str::len)
        .sum();

    let byte = match e.column() {
        0 => line_start.saturating_sub(1),
        column => line_start + column - 1,
    };
    let mut byte = byte.min(contents.len());
    while !contents.is_char_boundary(byte) {
        byte -= 1;
    }
    contents[..byte].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(text: &str) -> ParseFailure {
        parse_strict(text).unwrap_err()
    }

    #[test]
    fn test_valid_text_parses() {
        assert!(parse_strict(r#"{"a": [1, 2]}"#).is_ok());
    }

    #[test]
    fn test_single_quote_key_offset() {
        // The opening single quote is the offending character
        let f = failure("{'a': 1}");
        assert_eq!(f.offset, 1);
        assert!(!f.message.contains(" at line "));
    }

    #[test]
    fn test_missing_comma_offset() {
        let f = failure(r#"{"a": 1 "b": 2}"#);
        assert_eq!(f.offset, 8);
    }

    #[test]
    fn test_trailing_comma_offset_on_second_line() {
        let text = "{\n  \"a\": 1,\n}";
        let f = failure(text);
        // The closing brace starts the third line
        assert_eq!(f.offset, text.chars().count() - 1);
    }

    #[test]
    fn test_raw_line_break_in_string_stays_on_its_line() {
        // serde reports column 0 on the next line for the control character
        let f = failure("\"ab\ncd\"");
        assert_eq!(f.offset, 3);

        let text = "{\"a\": \"x\n\"}";
        let f = failure(text);
        assert_eq!(text.chars().nth(f.offset), Some('\n'));
    }

    #[test]
    fn test_eof_anchors_at_end() {
        let text = r#"{"a": "unterminated}"#;
        let f = failure(text);
        assert_eq!(f.offset, text.chars().count());
        assert!(f.message.contains("EOF"));
    }

    #[test]
    fn test_empty_input_is_eof() {
        let f = failure("");
        assert_eq!(f.offset, 0);
    }

    #[test]
    fn test_offset_counts_characters_not_bytes() {
        // Each Cyrillic letter is two bytes in UTF-8
        let text = r#"{"ключ": 1 "b": 2}"#;
        let f = failure(text);
        assert_eq!(f.offset, 11);
        assert_eq!(text.chars().nth(f.offset), Some('"'));
    }
}
