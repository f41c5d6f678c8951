//! End-to-end validation scenarios.

use jsonmend::{Diagnostic, SuggestionKind, ValidResult, Validation, ValueKind, validate};
use pretty_assertions::assert_eq;

fn valid(text: &str) -> ValidResult {
    match validate(text) {
        Validation::Valid(result) => result,
        Validation::Invalid(d) => panic!("expected valid, got {:?}", d),
    }
}

fn invalid(text: &str) -> Diagnostic {
    match validate(text) {
        Validation::Invalid(d) => d,
        Validation::Valid(v) => panic!("expected invalid, got {:?}", v),
    }
}

fn kinds(d: &Diagnostic) -> Vec<SuggestionKind> {
    d.suggestions.iter().map(|s| s.kind).collect()
}

#[test]
fn test_valid_object() {
    let result = valid(r#"{"a": 1, "b": 2}"#);
    assert_eq!((result.kind, result.size), (ValueKind::Object, Some(2)));
}

#[test]
fn test_valid_array() {
    let result = valid("[1, 2, 3]");
    assert_eq!((result.kind, result.size), (ValueKind::Array, Some(3)));
    assert_eq!(result.pretty, "[\n  1,\n  2,\n  3\n]");
}

#[test]
fn test_single_quotes() {
    let d = invalid("{'a': 1}");
    assert!(kinds(&d).contains(&SuggestionKind::SingleQuotes));
    assert!(d.repair.succeeded());
    assert_eq!(d.repair.payload(), "{\n  \"a\": 1\n}");
    assert_eq!(d.snippet.error_char, "'");
}

#[test]
fn test_trailing_comma() {
    let d = invalid(r#"{"a": 1,}"#);
    assert!(kinds(&d).contains(&SuggestionKind::TrailingComma));
    assert!(d.repair.succeeded());
    assert_eq!(d.repair.payload(), "{\n  \"a\": 1\n}");
    assert_eq!(d.snippet.error_char, "}");
}

#[test]
fn test_missing_comma() {
    let d = invalid(r#"{"a": 1 "b": 2}"#);
    assert!(kinds(&d).contains(&SuggestionKind::MissingComma));
    assert_eq!(d.position.column, 9);
    assert_eq!(d.repair.payload(), "{\n  \"a\": 1,\n  \"b\": 2\n}");
}

#[test]
fn test_unterminated_string() {
    let text = r#"{"a": "unterminated}"#;
    let d = invalid(text);
    assert!(kinds(&d).contains(&SuggestionKind::UnterminatedString));
    assert_eq!(d.position.line, 1);
    assert_eq!(d.position.column, text.chars().count() + 1);
    assert_eq!(d.snippet.error_char, "");
    assert_eq!(d.snippet.before, text);
}

#[test]
fn test_multiline_failure_points_at_line() {
    let text = "{\n  \"name\": \"x\",\n  count: 2\n}";
    let d = invalid(text);
    assert_eq!(d.position.line, 3);
    assert_eq!(d.position.line_text, "  count: 2");
    assert_eq!(kinds(&d), vec![SuggestionKind::UnquotedKey]);
    assert_eq!(d.repair.payload(), "{\n  \"name\": \"x\",\n  \"count\": 2\n}");
}

#[test]
fn test_non_ascii_is_preserved_in_repair() {
    let d = invalid("{'город': 'Москва'}");
    assert_eq!(d.repair.payload(), "{\n  \"город\": \"Москва\"\n}");
}

#[test]
fn test_unrepairable_input_reports_reason() {
    let d = invalid("   ");
    assert!(!d.repair.succeeded());
    assert_eq!(d.repair.payload(), "no JSON value found");
}

#[test]
fn test_line_break_inside_string_points_at_end_of_line() {
    let d = invalid("\"ab\ncd\"");
    assert_eq!((d.position.line, d.position.column), (1, 4));
    assert_eq!(d.position.line_text, "\"ab");
    assert_eq!(d.snippet.error_char, "");
    assert_eq!(d.snippet.before, "\"ab");
    assert!(kinds(&d).contains(&SuggestionKind::UnterminatedString));

    let d = invalid("{\"a\": \"x\n\"}");
    assert_eq!((d.position.line, d.position.column), (1, 9));
}

#[test]
fn test_big_integers_keep_their_digits() {
    let result = valid("[12345678901234567890123]");
    assert_eq!(result.pretty, "[\n  12345678901234567890123\n]");

    let d = invalid("[12345678901234567890123,]");
    assert_eq!(d.repair.payload(), "[\n  12345678901234567890123\n]");
}
