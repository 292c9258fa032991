//! Sparse matrices built from three columns of a data frame.
//!
//! One column supplies the values, two supply the row and column indices.
//! The matrix shape is `(max row + 1) x (max column + 1)`.
//!
//! The builders don't deduplicate. A coordinate (COO) matrix keeps every
//! triplet, repeated coordinates included; converting to compressed-row
//! (CSR) sums repeated coordinates.
//!
//! ```ignore
//! let interactions = read_csv(Path::new("interactions.csv"))?;
//! let csr = build_csr_matrix(&interactions, "playtime", "user_idx", "app_idx")?;
//! ```

use polars::prelude::*;
use sprs::{CsMat, TriMat};
use thiserror::Error;
use tracing::debug;

/// Errors raised while building a sparse matrix
#[derive(Error, Debug)]
pub enum SparseError {
    #[error("Data frame error: {0}")]
    Polars(#[from] PolarsError),

    /// Values must be numeric
    #[error("Non-numeric value in {column}, row {row}: {value}")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },

    /// Indices must be non-negative integers
    #[error("Invalid index in {column}, row {row}: {value}")]
    InvalidIndex {
        column: String,
        row: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, SparseError>;

/// Triplets pulled from the frame, plus the inferred shape.
struct Triplets {
    shape: (usize, usize),
    rows: Vec<usize>,
    cols: Vec<usize>,
    data: Vec<f64>,
}

fn cell_text(column: &Column, row: usize) -> String {
    column.get(row).map(|v| v.to_string()).unwrap_or_default()
}

/// A column as floats; `None` marks a null or unconvertible cell.
fn as_floats(column: &Column) -> Result<Vec<Option<f64>>> {
    Ok(column.cast(&DataType::Float64)?.f64()?.into_iter().collect())
}

fn indices(df: &DataFrame, name: &str) -> Result<Vec<usize>> {
    let column = df.column(name)?;
    as_floats(column)?
        .into_iter()
        .enumerate()
        .map(|(row, index)| {
            index
                .filter(|i| i.fract() == 0.0 && *i >= 0.0)
                .map(|i| i as usize)
                .ok_or_else(|| SparseError::InvalidIndex {
                    column: name.to_string(),
                    row,
                    value: cell_text(column, row),
                })
        })
        .collect()
}

fn values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?;
    as_floats(column)?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| SparseError::NonNumericValue {
                column: name.to_string(),
                row,
                value: cell_text(column, row),
            })
        })
        .collect()
}

fn collect_triplets(df: &DataFrame, data_col: &str, row_col: &str, col_col: &str) -> Result<Triplets> {
    let data = values(df, data_col)?;
    let rows = indices(df, row_col)?;
    let cols = indices(df, col_col)?;

    let shape = (
        rows.iter().max().map_or(0, |r| r + 1),
        cols.iter().max().map_or(0, |c| c + 1),
    );
    debug!("Collected {} triplets, shape {:?}", data.len(), shape);
    Ok(Triplets {
        shape,
        rows,
        cols,
        data,
    })
}

/// Coordinate-format matrix holding every (value, row, column) triplet.
pub fn build_coo_matrix(
    df: &DataFrame,
    data_col: &str,
    row_col: &str,
    col_col: &str,
) -> Result<TriMat<f64>> {
    let t = collect_triplets(df, data_col, row_col, col_col)?;
    Ok(TriMat::from_triplets(t.shape, t.rows, t.cols, t.data))
}

/// Compressed-row matrix; repeated coordinates are summed.
pub fn build_csr_matrix(
    df: &DataFrame,
    data_col: &str,
    row_col: &str,
    col_col: &str,
) -> Result<CsMat<f64>> {
    let coo = build_coo_matrix(df, data_col, row_col, col_col)?;
    Ok(coo.to_csr())
}
