use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classes of load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or read.
    FileAccess,
    /// The input was read but a row could not be turned into a record.
    Parse,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty: expected a header row")]
    MissingHeader,

    #[error("line {line}: missing {field} column")]
    MissingField { line: u64, field: &'static str },

    #[error("line {line}: {field} '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("malformed CSV")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::FileAccess { .. } => ErrorKind::FileAccess,
            LoadError::MissingHeader
            | LoadError::MissingField { .. }
            | LoadError::InvalidNumber { .. }
            | LoadError::Csv { .. } => ErrorKind::Parse,
        }
    }
}
