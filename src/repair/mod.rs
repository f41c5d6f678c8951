//! Repair-and-revalidate orchestration.
//!
//! A [`RepairCapability`] proposes a corrected document. Its output is never
//! trusted: [`AutoRepairer`] re-parses it with the strict grammar and only
//! then reports success.

pub mod lenient;

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use thiserror::Error;

use crate::parse_error::parse_strict;
use crate::pretty::{DEFAULT_INDENT, pretty_print};

pub use lenient::LenientRepairer;

/// Why a repair capability gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RepairError {
    pub message: String,
}

impl RepairError {
    pub fn new(message: impl Into<String>) -> Self {
        RepairError {
            message: message.into(),
        }
    }
}

/// A best-effort structural repair strategy
pub trait RepairCapability {
    /// Propose a corrected version of `text`
    fn attempt_repair(&self, text: &str) -> Result<String, RepairError>;
}

impl<F> RepairCapability for F
where
    F: Fn(&str) -> Result<String, RepairError>,
{
    fn attempt_repair(&self, text: &str) -> Result<String, RepairError> {
        self(text)
    }
}

/// Result of one repair attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum RepairOutcome {
    /// Pretty-printed document that passed strict re-parsing
    Repaired(String),
    /// Reason the repair was rejected
    Failed(String),
}

impl RepairOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, RepairOutcome::Repaired(_))
    }

    /// The repaired document or the failure reason
    pub fn payload(&self) -> &str {
        match self {
            RepairOutcome::Repaired(text) | RepairOutcome::Failed(text) => text,
        }
    }
}

/// Runs a capability and re-validates whatever it returns
#[derive(Debug, Clone)]
pub struct AutoRepairer<R = LenientRepairer> {
    capability: R,
    indent: usize,
}

impl Default for AutoRepairer {
    fn default() -> Self {
        AutoRepairer::new(LenientRepairer)
    }
}

impl<R: RepairCapability> AutoRepairer<R> {
    pub fn new(capability: R) -> Self {
        AutoRepairer {
            capability,
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the indentation width of repaired payloads
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Attempt a repair. Every failure path resolves to `RepairOutcome::Failed`.
    ///
    /// A panicking capability is caught and reported as `Failed`, but the
    /// process-wide panic hook still runs first. With the default hook that
    /// prints the panic message to stderr; install a quiet hook with
    /// [`std::panic::set_hook`] if that output is unwanted.
    pub fn repair(&self, text: &str) -> RepairOutcome {
        let attempt =
            panic::catch_unwind(AssertUnwindSafe(|| self.capability.attempt_repair(text)));

        let fixed = match attempt {
            Ok(Ok(fixed)) => fixed,
            Ok(Err(e)) => {
                tracing::debug!(reason = %e, "repair capability failed");
                return RepairOutcome::Failed(e.to_string());
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::warn!(%reason, "repair capability panicked");
                return RepairOutcome::Failed(reason);
            }
        };

        match parse_strict(&fixed) {
            Ok(value) => RepairOutcome::Repaired(pretty_print(&value, self.indent)),
            Err(failure) => {
                tracing::debug!(
                    message = %failure.message,
                    "repaired text rejected by strict parser"
                );
                RepairOutcome::Failed(failure.message)
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("repair panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("repair panicked: {}", s)
    } else {
        "repair panicked".to_string()
    }
}
