//! Fatal errors for an extraction run.
//!
//! Malformed input lines are not errors: they are reported through
//! [`ExtractEvent::MalformedLine`](crate::output::ExtractEvent::MalformedLine)
//! and skipped. Everything here terminates the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What the extractor was doing when an I/O error hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    OpenInput,
    ReadInput,
    WriteOutput,
}

impl std::fmt::Display for IoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IoAction::OpenInput => "failed to open input file",
            IoAction::ReadInput => "failed to read input file",
            IoAction::WriteOutput => "failed to write output file",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The record count was not a non-negative integer.
    #[error("invalid record count: {0}")]
    Argument(String),

    /// Filesystem failure on the input or output side. Invalid UTF-8 in the
    /// input surfaces here with kind `InvalidData`.
    #[error("{action} '{}': {source}", path.display())]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    pub(crate) fn io(action: IoAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// The `io::ErrorKind` this error maps to when surfaced as `io::Error`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            ExtractError::Argument(_) => io::ErrorKind::InvalidInput,
            ExtractError::Io { source, .. } => source.kind(),
        }
    }
}

impl From<ExtractError> for io::Error {
    fn from(e: ExtractError) -> Self {
        io::Error::new(e.kind(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_maps_to_invalid_input() {
        let err = ExtractError::Argument("'abc' is not an integer".to_string());
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("'abc' is not an integer"));
    }

    #[test]
    fn test_io_error_keeps_source_kind_and_path() {
        let err = ExtractError::io(
            IoAction::OpenInput,
            "missing.jsonl",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        let msg = err.to_string();
        assert!(msg.starts_with("failed to open input file 'missing.jsonl'"));
        assert!(msg.contains("No such file or directory"));
    }
}
