//! Error types for scenario and statistics I/O

use std::path::PathBuf;

use thiserror::Error;

/// Result type for whole-file operations
pub type IoResult<T> = Result<T, IoError>;

/// Errors raised while turning a line into a [`BodyRecord`](crate::BodyRecord)
/// or a record back into a line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} tokens, found {found}")]
    Format { expected: usize, found: usize },

    #[error("field `{field}` is not a number: {token:?}")]
    Number { field: &'static str, token: String },

    #[error("unknown body kind {keyword:?}")]
    UnknownKind { keyword: String },

    #[error("color must be a single non-empty token, got {color:?}")]
    InvalidColor { color: String },

    #[error("radius must be finite, got {radius}")]
    NonFiniteRadius { radius: f64 },
}

/// Rejection reported by a rendering collaborator
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct WrapError(pub String);

/// Errors that abort a load, save or statistics call
#[derive(Error, Debug)]
pub enum IoError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },

    #[error("line {line}: wrapping failed: {source}")]
    Wrap {
        line: usize,
        #[source]
        source: WrapError,
    },

    #[error("config: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| IoError::Io { path, source }
    }
}
