//! Error types for the data-loader crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, reading, or parsing dataset files.
///
/// Every loader in this crate fails fast: a malformed line or a missing file
/// aborts the load with one of these variants rather than skipping the row.
///
/// Rust concept: Using an enum for errors lets us handle different cases.
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An expected dataset file is not on disk
    #[error("Dataset file not found: {path}")]
    MissingFile { path: PathBuf },

    /// Line in a data file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} at line {line} in {file}")]
    FieldCountMismatch {
        file: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// An item id was requested that the catalog has no row for
    #[error("Item {id} is not in the catalog")]
    UnknownItem { id: u32 },

    /// A dataset identifier that no builtin layout is registered for
    #[error("Unknown dataset '{name}'")]
    UnknownDataset { name: String },
}

/// Convenience type alias for Results in this crate
///
/// Rust concept: Type aliases make code more readable
/// Instead of writing `Result<T, DataLoadError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, DataLoadError>;
