//! Diagnostics for malformed JSON.
//!
//! [`validate`] runs a strict parse. Valid documents produce a structural
//! summary; invalid ones produce a [`Diagnostic`] with the failure position,
//! a highlighted excerpt, a re-validated automatic repair and heuristic hints.
//!
//! ```
//! use jsonmend::{Validation, validate};
//!
//! let Validation::Invalid(diagnostic) = validate("{'a': 1}") else {
//!     panic!("single quotes are not JSON");
//! };
//! assert_eq!(diagnostic.position.column, 2);
//! assert!(diagnostic.repair.succeeded());
//! ```

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod heuristics;
pub mod highlight;
pub mod parse_error;
pub mod position;
pub mod pretty;
pub mod repair;
pub mod report;

pub use config::Config;
pub use diagnostic::{
    Diagnostic, ValidResult, Validation, Validator, ValidatorOptions, ValueKind, validate,
};
pub use error::{Error, Result};
pub use heuristics::{Suggestion, SuggestionKind};
pub use highlight::Snippet;
pub use parse_error::ParseFailure;
pub use position::Position;
pub use repair::{AutoRepairer, LenientRepairer, RepairCapability, RepairError, RepairOutcome};
