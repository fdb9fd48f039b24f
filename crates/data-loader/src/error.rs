//! Error types shared by the loader, the ranker and the writer.
//!
//! Every library crate in the workspace reports failures through
//! [`MovieDataError`]; nothing below the binary prints.

use thiserror::Error;

/// Errors that can occur while loading, ranking or writing movie data.
#[derive(Error, Debug)]
pub enum MovieDataError {
    /// A caller-supplied argument was out of range (negative year, empty path, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Source file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoFailure(#[from] std::io::Error),

    /// A data line did not have the canonical number of fields
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A field on a data line could not be parsed
    ///
    /// `line` is 1-based and counts the header.
    #[error("Malformed record at line {line}: invalid {field} '{value}'")]
    MalformedRecord {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A movie selected for ranking lists no actors
    #[error("Movie {id} ('{title}') has no actors")]
    EmptyActorList { id: u32, title: String },
}

/// Coarse classification of [`MovieDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    FileNotFound,
    IoFailure,
    MalformedRecord,
    EmptyActorList,
}

impl MovieDataError {
    /// Which of the five failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MovieDataError::InvalidInput(_) => ErrorKind::InvalidInput,
            MovieDataError::FileNotFound { .. } => ErrorKind::FileNotFound,
            MovieDataError::IoFailure(_) => ErrorKind::IoFailure,
            MovieDataError::FieldCountMismatch { .. } | MovieDataError::MalformedRecord { .. } => {
                ErrorKind::MalformedRecord
            }
            MovieDataError::EmptyActorList { .. } => ErrorKind::EmptyActorList,
        }
    }
}

/// Convenience type alias for Results in this workspace
pub type Result<T> = std::result::Result<T, MovieDataError>;
