//! Error types for the reduction pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reducing an accident report file.
#[derive(Debug, Error)]
pub enum ReduceError {
    // === File System Errors ===
    /// Input file missing or unreadable.
    #[error("failed to open input {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created.
    #[error("failed to create output {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Failed to read a CSV record.
    #[error("failed to read CSV record {line}: {source}")]
    CsvRead {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Failed to write a CSV record.
    #[error("failed to write CSV record {line}: {source}")]
    CsvWrite {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Input has no rows at all, not even a header.
    #[error("input CSV has no rows")]
    EmptyInput,

    // === Row Shape Errors ===
    /// Row does not cover the fixed removal indices.
    #[error("row {line} has {found} fields, expected at least {required}")]
    RowTooShort {
        line: u64,
        found: usize,
        required: usize,
    },

    /// Severity field value is not in the label table.
    #[error("row {line} has unknown severity label '{label}'")]
    UnknownSeverity { line: u64, label: String },

    // === Severity Table Errors ===
    /// Severity table file missing or unreadable.
    #[error("failed to read severity table {path}: {source}")]
    SeverityMapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Severity table file is not a valid JSON object of label codes.
    #[error("failed to parse severity table {path}: {source}")]
    SeverityMapParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Severity table contains no labels.
    #[error("severity table is empty: {path}")]
    EmptySeverityMap { path: PathBuf },
}

/// Result type for reduction operations.
pub type Result<T> = std::result::Result<T, ReduceError>;
