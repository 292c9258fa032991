//! Build metric inputs from loaded data frames.
//!
//! User and item columns must be integer or string typed; they are compared
//! as [`Key`]s. Float-typed id columns are rejected rather than coerced.

use crate::error::{MetricsError, Result};
use crate::types::{Key, RankedItem, Relevance};
use polars::prelude::*;

/// Default name of the predicted-rank column
pub const DEFAULT_RANK_COLUMN: &str = "rank";

fn invalid_value(values: &Column, row: usize) -> MetricsError {
    MetricsError::InvalidValue {
        column: values.name().to_string(),
        row,
        value: values
            .get(row)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    }
}

fn key_column(df: &DataFrame, column: &str) -> Result<Vec<Key>> {
    let values = df.column(column)?;
    let keys: Vec<Option<Key>> = match values.dtype() {
        dtype if dtype.is_integer() => values
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|v| v.map(Key::Int))
            .collect(),
        DataType::String => values
            .str()?
            .into_iter()
            .map(|v| v.map(|s| Key::Str(s.to_string())))
            .collect(),
        dtype => {
            return Err(MetricsError::UnsupportedKeyType {
                column: column.to_string(),
                dtype: dtype.to_string(),
            });
        }
    };

    keys.into_iter()
        .enumerate()
        .map(|(row, key)| key.ok_or_else(|| invalid_value(values, row)))
        .collect()
}

fn float_column(df: &DataFrame, column: &str) -> Result<(Column, Vec<Option<f64>>)> {
    let values = df.column(column)?;
    let floats = values.cast(&DataType::Float64)?.f64()?.into_iter().collect();
    Ok((values.clone(), floats))
}

/// Ground truth from a data frame.
///
/// Without `relevance_col` every row counts as relevance 1.0.
pub fn relevance_from_frame(
    df: &DataFrame,
    user_col: &str,
    item_col: &str,
    relevance_col: Option<&str>,
) -> Result<Vec<Relevance<Key, Key>>> {
    let users = key_column(df, user_col)?;
    let items = key_column(df, item_col)?;
    let relevances = match relevance_col {
        Some(col) => {
            let (values, floats) = float_column(df, col)?;
            floats
                .into_iter()
                .enumerate()
                .map(|(row, rel)| rel.ok_or_else(|| invalid_value(&values, row)))
                .collect::<Result<Vec<f64>>>()?
        }
        None => vec![1.0; df.height()],
    };

    Ok(users
        .into_iter()
        .zip(items)
        .zip(relevances)
        .map(|((user, item), relevance)| Relevance::graded(user, item, relevance))
        .collect())
}

/// Predicted rankings from a data frame. Ranks must be positive integers.
pub fn ranked_items_from_frame(
    df: &DataFrame,
    user_col: &str,
    item_col: &str,
    rank_col: &str,
) -> Result<Vec<RankedItem<Key, Key>>> {
    let users = key_column(df, user_col)?;
    let items = key_column(df, item_col)?;
    let (values, floats) = float_column(df, rank_col)?;
    let ranks = floats
        .into_iter()
        .enumerate()
        .map(|(row, rank)| {
            rank.filter(|r| r.fract() == 0.0 && *r >= 1.0)
                .map(|r| r as usize)
                .ok_or_else(|| invalid_value(&values, row))
        })
        .collect::<Result<Vec<usize>>>()?;

    Ok(users
        .into_iter()
        .zip(items)
        .zip(ranks)
        .map(|((user, item), rank)| RankedItem::new(user, item, rank))
        .collect())
}
