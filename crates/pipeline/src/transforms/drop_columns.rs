//! Transform that removes a fixed list of columns.

use crate::traits::TableTransform;
use anyhow::Result;
use data_loader::drop_columns;
use polars::prelude::DataFrame;

/// Drops columns by name. Every listed column must be present.
pub struct DropColumns {
    columns: Vec<String>,
}

impl DropColumns {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl TableTransform for DropColumns {
    fn name(&self) -> &str {
        "DropColumns"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        Ok(drop_columns(df, &names)?)
    }
}
