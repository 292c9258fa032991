//! Placeholder for a missing-value policy.

use crate::traits::TableTransform;
use anyhow::Result;
use polars::prelude::DataFrame;

/// Null-handling hook for the assembled dataset.
///
/// No policy has been chosen yet, so the frame passes through untouched.
/// `timestamp_col` names the column an ordering-aware policy would use.
pub struct ImputeMissingValues {
    timestamp_col: String,
}

impl ImputeMissingValues {
    pub fn new(timestamp_col: &str) -> Self {
        Self {
            timestamp_col: timestamp_col.to_string(),
        }
    }

    pub fn timestamp_col(&self) -> &str {
        &self.timestamp_col
    }
}

impl TableTransform for ImputeMissingValues {
    fn name(&self) -> &str {
        "ImputeMissingValues"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_is_a_no_op() {
        let df = df!(
            "app_id" => [1i64],
            "unix_timestamp_created" => [None::<i64>],
            "title" => [None::<&str>],
        )
        .unwrap();
        let imputer = ImputeMissingValues::new("unix_timestamp_created");
        assert_eq!(imputer.timestamp_col(), "unix_timestamp_created");
        assert!(imputer.apply(df.clone()).unwrap().equals_missing(&df));
    }
}
