use polars::prelude::PolarsError;
use std::{io, path::PathBuf};
use thiserror::Error;
use tokio::task::JoinError;

/**
Result type to simplify function signatures.

This is a custom result type that uses our custom `MovesViewError` for the error type.

Functions can return `MovesViewResult<T>` and then use `?` to automatically propagate errors.
*/
pub type MovesViewResult<T> = Result<T, MovesViewError>;

/**
Custom error type for Moves View.

This enum defines all the possible errors that can occur in the application.

Data-shape problems inside individual cells (bad Power values, blank fields,
unknown types) are never errors: they are coerced when the records are built.
*/
#[derive(Error, Debug)]
pub enum MovesViewError {
    // Wrapper for standard IO errors.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // Wrapper for Polars errors raised while reading or writing CSV data.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    // Errors encountered while parsing CSV data (e.g., no delimiter produced a usable header).
    #[error("CSV parsing error: {0}")]
    CsvParsing(String),

    /// The header row lacks one or more of the columns a move record is built from.
    #[error("Missing required columns in {path:#?}: {columns:?}")]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    // Indicates that a provided file extension or file type are not supported.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    // Indicates that a specified file could not be found, storing the attempted path.
    #[error("File not found: {0:#?}")]
    FileNotFound(PathBuf),

    // Indicates an invalid CSV delimiter was provided (empty or multi-byte).
    #[error("Invalid CSV delimiter: '{0}'")]
    InvalidDelimiter(String),

    // Wrapper for Tokio JoinErrors, occurring when blocking tasks fail.
    #[error("Tokio JoinError: {0}")]
    TokioJoin(#[from] JoinError),

    // Errors occurring when receiving data from asynchronous channels.
    #[error("Channel receive error: {0}")]
    ChannelReceive(String),

    #[error("Invalid value for command-line argument '{arg_name}': {reason}")]
    InvalidArgument {
        arg_name: String, // Context about *which* argument failed
        reason: String,   // The specific error reason
    },

    // A catch-all for other, less specific errors not covered by specific variants.
    #[error("Other error: {0}")]
    Other(String),
}

// Allows generic error strings to be converted with `?` or `.into()`.
impl From<String> for MovesViewError {
    fn from(err: String) -> MovesViewError {
        MovesViewError::Other(err)
    }
}
