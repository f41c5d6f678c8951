//! Pattern checks for common JSON authoring mistakes.
//!
//! Each rule looks at the failing line only and is evaluated independently,
//! so a line can trigger several suggestions. These are textual heuristics:
//! they can fire on valid text and miss real mistakes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Category of a likely mistake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    SingleQuotes,
    UnquotedKey,
    TrailingComma,
    MissingComma,
    UnterminatedString,
}

impl SuggestionKind {
    /// Human-readable hint for this mistake
    pub fn label(self) -> &'static str {
        match self {
            SuggestionKind::SingleQuotes => "Single quotes: replace ' with \"",
            SuggestionKind::UnquotedKey => {
                "Unquoted keys: wrap keys in double quotes, e.g. {\"key\": value}"
            }
            SuggestionKind::TrailingComma => {
                "Trailing comma: remove the comma before the closing } or ]"
            }
            SuggestionKind::MissingComma => {
                "Missing comma: separate object members and array elements with commas"
            }
            SuggestionKind::UnterminatedString => "Unterminated string: add the closing \"",
        }
    }
}

/// One heuristic hint about the failing line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub label: String,
}

impl From<SuggestionKind> for Suggestion {
    fn from(kind: SuggestionKind) -> Self {
        Suggestion {
            kind,
            label: kind.label().to_string(),
        }
    }
}

static UNQUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\s*:").expect("valid regex"));
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[}\]]").expect("valid regex"));
static MISSING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["\w]\s+["{]"#).expect("valid regex"));

/// A predicate paired with the suggestion it produces
struct Rule {
    kind: SuggestionKind,
    detect: fn(&str) -> bool,
}

/// Evaluated top to bottom; new rules go at the end
static RULES: &[Rule] = &[
    Rule { kind: SuggestionKind::SingleQuotes, detect: has_single_quote },
    Rule { kind: SuggestionKind::UnquotedKey, detect: has_unquoted_key },
    Rule { kind: SuggestionKind::TrailingComma, detect: has_trailing_comma },
    Rule { kind: SuggestionKind::MissingComma, detect: has_missing_comma },
    Rule { kind: SuggestionKind::UnterminatedString, detect: has_odd_quotes },
];

fn has_single_quote(line: &str) -> bool {
    line.contains('\'')
}

fn has_unquoted_key(line: &str) -> bool {
    UNQUOTED_KEY.is_match(line)
}

fn has_trailing_comma(line: &str) -> bool {
    TRAILING_COMMA.is_match(line)
}

fn has_missing_comma(line: &str) -> bool {
    MISSING_COMMA.is_match(line)
}

fn has_odd_quotes(line: &str) -> bool {
    line.matches('"').count() % 2 == 1
}

/// Collect suggestions for `line_text` in rule order
pub fn analyze(line_text: &str) -> Vec<Suggestion> {
    RULES
        .iter()
        .filter(|rule| (rule.detect)(line_text))
        .map(|rule| Suggestion::from(rule.kind))
        .collect()
}
