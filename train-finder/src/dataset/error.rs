//! Dataset decoding error types.

use std::path::PathBuf;

use crate::domain::TimeError;

/// Errors from decoding dataset bytes into train records.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not a JSON array of objects
    #[error("malformed dataset: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A recognized field is present but has the wrong JSON type
    #[error("record {record}: field `{field}` must be a {expected}, found {found}")]
    TypeMismatch {
        record: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A time field is a string but not in HH:MM:SS form
    #[error("record {record}: field `{field}` has bad time {value:?}: {source}")]
    TimeParse {
        record: usize,
        field: &'static str,
        value: String,
        #[source]
        source: TimeError,
    },
}

/// Errors from loading a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
