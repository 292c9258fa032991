//! Error types for the metrics crate.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while aligning or scoring rankings
#[derive(Error, Debug)]
pub enum MetricsError {
    /// The cutoff must keep at least one position
    #[error("Cutoff k must be at least 1, got {k}")]
    InvalidCutoff { k: usize },

    /// Ranks are 1-based
    #[error("Invalid rank {rank} for user {user}, item {item}: ranks start at 1")]
    InvalidRank {
        user: String,
        item: String,
        rank: usize,
    },

    /// Nothing to average over
    #[error("Ground truth is empty")]
    EmptyGroundTruth,

    /// User and item columns must hold integers or strings
    #[error("Column {column} has type {dtype}; keys must be integers or strings")]
    UnsupportedKeyType { column: String, dtype: String },

    /// A cell couldn't be turned into a key, rank or relevance
    #[error("Invalid value for {column} in row {row}: {value}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    /// Polars rejected a column lookup or cast
    #[error("Data frame error: {0}")]
    Polars(#[from] PolarsError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MetricsError>;
