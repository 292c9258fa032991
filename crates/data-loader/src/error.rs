//! Error types for the data-loader crate.
//!
//! Every variant here is an input-contract violation or an I/O failure.
//! None of them are retried; they propagate straight to the caller.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while loading, reshaping, or writing data frames
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Polars rejected a read, reshape or write
    #[error("Data frame error: {0}")]
    Polars(#[from] PolarsError),

    /// A directory that should hold CSV chunks holds none
    #[error("No CSV files found in {path}")]
    NoCsvFiles { path: String },

    /// A column required by a loader is absent
    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    /// One review chunk lacks a column the others rely on
    #[error("Column {column} missing from {path}")]
    ChunkMissingColumn { column: String, path: String },

    /// Two columns would end up with the same name
    #[error("Duplicate column name: {column}")]
    ColumnCollision { column: String },

    /// A cell couldn't be interpreted the way its column demands
    ///
    /// `row` is the zero-based data row (header excluded).
    #[error("Invalid value for {field} in row {row}: {value}")]
    InvalidValue {
        field: String,
        row: usize,
        value: String,
    },

    /// A storefront URL didn't have the `/<kind>/<id>/` shape
    #[error("Malformed storefront URL in row {row}: {url}")]
    MalformedUrl { row: usize, url: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
