//! Error types for the shell around the diagnostic engine.
//!
//! Malformed input is never an `Error`: it becomes a `Diagnostic`. These
//! variants cover configuration, file access and command-line usage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading input or managing configuration
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    /// Reading input or writing config failed.
    Io(#[from] std::io::Error),

    #[error("failed to read {}: {}", .path.display(), .source)]
    /// An input file could not be read.
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    /// The config or a report could not be serialized.
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    /// `dirs` found no home directory for the config file.
    NoHomeDir,

    #[error("{0}")]
    /// Command-line arguments were invalid.
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_message_names_path() {
        let err = Error::ReadInput {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let text = err.to_string();
        assert!(text.contains("missing.json"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_usage_message_is_verbatim() {
        let err = Error::Usage("unknown flag --nope".to_string());
        assert_eq!(err.to_string(), "unknown flag --nope");
    }
}
