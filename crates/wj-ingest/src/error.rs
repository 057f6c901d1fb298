//! Error types for praise-history ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and building service records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read an input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on a reader without a path.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV input.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row carried a date that is not a valid calendar date. The row is
    /// rejected and reported, never silently skipped.
    #[error("row {row}: malformed date '{value}'")]
    MalformedDate { value: String, row: usize },

    /// The input contained no usable data rows.
    #[error("input has no data rows")]
    EmptyInput,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
