//! Validation entry point: strict parse, then either a structural summary or
//! a full diagnostic for the first failure.

use serde::Serialize;
use serde_json::Value;

use crate::heuristics::{Suggestion, analyze};
use crate::highlight::{DEFAULT_RADIUS, Snippet, highlight};
use crate::parse_error::{ParseFailure, parse_strict};
use crate::position::{Position, resolve};
use crate::pretty::{DEFAULT_INDENT, pretty_print};
use crate::repair::{AutoRepairer, LenientRepairer, RepairCapability, RepairOutcome};

/// Shape of a successfully parsed root value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Object,
    Array,
    Scalar,
}

/// Structural summary of a valid document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidResult {
    pub kind: ValueKind,
    /// Key count for objects, element count for arrays, None for scalars
    pub size: Option<usize>,
    /// The document pretty-printed
    pub pretty: String,
}

impl ValidResult {
    fn summarize(value: &Value, indent: usize) -> Self {
        let (kind, size) = match value {
            Value::Object(map) => (ValueKind::Object, Some(map.len())),
            Value::Array(items) => (ValueKind::Array, Some(items.len())),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                (ValueKind::Scalar, None)
            }
        };
        ValidResult {
            kind,
            size,
            pretty: pretty_print(value, indent),
        }
    }
}

/// Everything known about the first structural failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub failure: ParseFailure,
    pub position: Position,
    pub snippet: Snippet,
    pub repair: RepairOutcome,
    pub suggestions: Vec<Suggestion>,
}

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validation {
    Valid(ValidResult),
    Invalid(Diagnostic),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

/// Tunables for snippet width and pretty-printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Characters of context on each side of the error
    pub radius: usize,
    /// Spaces per indentation level in pretty output
    pub indent: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        ValidatorOptions {
            radius: DEFAULT_RADIUS,
            indent: DEFAULT_INDENT,
        }
    }
}

/// Composes position, snippet, repair and suggestions for invalid input
#[derive(Debug, Clone)]
pub struct Validator<R = LenientRepairer> {
    repairer: AutoRepairer<R>,
    options: ValidatorOptions,
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new(LenientRepairer, ValidatorOptions::default())
    }
}

impl<R: RepairCapability> Validator<R> {
    pub fn new(capability: R, options: ValidatorOptions) -> Self {
        Validator {
            repairer: AutoRepairer::new(capability).with_indent(options.indent),
            options,
        }
    }

    /// Validate one document
    pub fn validate(&self, text: &str) -> Validation {
        match parse_strict(text) {
            Ok(value) => Validation::Valid(ValidResult::summarize(&value, self.options.indent)),
            Err(failure) => Validation::Invalid(self.diagnose(text, failure)),
        }
    }

    fn diagnose(&self, text: &str, failure: ParseFailure) -> Diagnostic {
        let position = resolve(text, failure.offset);
        let snippet = highlight(&position.line_text, position.column, self.options.radius);
        let repair = self.repairer.repair(text);
        let suggestions = analyze(&position.line_text);

        tracing::debug!(
            line = position.line,
            column = position.column,
            repaired = repair.succeeded(),
            suggestions = suggestions.len(),
            "diagnosed invalid document"
        );

        Diagnostic {
            failure,
            position,
            snippet,
            repair,
            suggestions,
        }
    }
}

/// Validate with the built-in repairer and default options
pub fn validate(text: &str) -> Validation {
    Validator::default().validate(text)
}
