//! Plain-text rendering of validation results for the terminal.

use std::fmt::Write;

use crate::config::Config;
use crate::diagnostic::{Diagnostic, ValidResult, Validation, ValueKind};
use crate::repair::RepairOutcome;

/// General advice appended to failure reports
const TIPS: &[&str] = &[
    "Use only double quotes \"",
    "Every key must be quoted",
    "Separate elements with commas, except after the last one",
    "Close every bracket {} [] and every quote",
    "For complicated cases, validate smaller pieces of the document",
];

/// Render a validation result. `text` must be the validated source.
pub fn render(validation: &Validation, text: &str, config: &Config) -> String {
    match validation {
        Validation::Valid(result) => render_valid(result),
        Validation::Invalid(diagnostic) => render_invalid(diagnostic, text, config),
    }
}

fn render_valid(result: &ValidResult) -> String {
    let mut out = String::from("JSON is valid\n\n");
    out.push_str(&result.pretty);
    out.push_str("\n\n");
    let _ = writeln!(out, "Type: {}", describe_shape(result));
    out
}

/// "object with 2 keys", "array with 1 element", "scalar"
pub fn describe_shape(result: &ValidResult) -> String {
    let plural = |n: usize, word: &str| {
        if n == 1 { format!("{} {}", n, word) } else { format!("{} {}s", n, word) }
    };
    match (result.kind, result.size) {
        (ValueKind::Object, Some(n)) => format!("object with {}", plural(n, "key")),
        (ValueKind::Array, Some(n)) => format!("array with {}", plural(n, "element")),
        _ => "scalar".to_string(),
    }
}

fn render_invalid(diagnostic: &Diagnostic, text: &str, config: &Config) -> String {
    let mut out = String::new();
    let position = &diagnostic.position;
    let snippet = &diagnostic.snippet;

    let _ = writeln!(out, "JSON error: {}", diagnostic.failure.message);
    let _ = writeln!(out, "Location: line {}, column {}", position.line, position.column);

    out.push_str("\nError in line:\n");
    let _ = writeln!(out, "  {}", snippet.text());
    // Keep tabs so the caret lines up under tab-indented text
    let pad: String = snippet
        .before
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let _ = writeln!(out, "  {}^", pad);

    let lines: Vec<&str> = text.split('\n').collect();
    if config.context_lines > 0 && position.line <= lines.len() {
        let start = position.line.saturating_sub(config.context_lines + 1);
        let end = lines.len().min(position.line + config.context_lines);
        out.push_str("\nContext:\n");
        for (index, line) in lines.iter().enumerate().take(end).skip(start) {
            let marker = if index + 1 == position.line { "> " } else { "  " };
            let _ = writeln!(out, "{:>4} {}{}", index + 1, marker, line);
        }
    }

    out.push_str("\nAutomatic repair:\n");
    match &diagnostic.repair {
        RepairOutcome::Repaired(payload) => {
            out.push_str("Repaired JSON:\n");
            out.push_str(payload);
            out.push('\n');
        }
        RepairOutcome::Failed(reason) => {
            let _ = writeln!(out, "Could not repair automatically: {}", reason);
        }
    }

    if !diagnostic.suggestions.is_empty() {
        out.push_str("\nPossible problems:\n");
        for suggestion in &diagnostic.suggestions {
            let _ = writeln!(out, "- {}", suggestion.label);
        }
    }

    if config.show_tips {
        out.push_str("\nTips:\n");
        for tip in TIPS {
            let _ = writeln!(out, "- {}", tip);
        }
    }

    out
}
