//! Generic "first non-missing value" column merge.
//!
//! Used to pick a canonical title out of several catalog sources, and works
//! the same for any number of candidate columns.

use crate::traits::TableTransform;
use anyhow::Result;
use data_loader::require_columns;
use polars::prelude::*;

/// Writes, per row, the first non-null value among `candidates` (in order)
/// into `target`. Rows where every candidate is null get null.
///
/// All candidate columns must exist. `target` is created if absent and
/// overwritten otherwise.
pub struct Coalesce {
    candidates: Vec<String>,
    target: String,
}

impl Coalesce {
    pub fn new<S: Into<String>>(candidates: impl IntoIterator<Item = S>, target: &str) -> Self {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            target: target.to_string(),
        }
    }
}

impl TableTransform for Coalesce {
    fn name(&self) -> &str {
        "Coalesce"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let names: Vec<&str> = self.candidates.iter().map(String::as_str).collect();
        require_columns(&df, &names)?;

        let exprs: Vec<Expr> = names.iter().map(|name| col(*name)).collect();
        let merged = df
            .lazy()
            .with_column(coalesce(&exprs).alias(self.target.as_str()))
            .collect()?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> DataFrame {
        df!(
            "app_id" => [70i64, 80, 90],
            "title_grps" => [Some("Half-Life"), None, None],
            "title_sgcd" => [Some("Half-Life (1998)"), Some("Counter-Strike: Condition Zero"), None],
        )
        .unwrap()
    }

    fn final_titles(df: &DataFrame) -> Vec<Option<String>> {
        df.column("final_title")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|t| t.map(str::to_string))
            .collect()
    }

    #[test]
    fn test_first_source_wins_when_present() {
        let df = Coalesce::new(["title_grps", "title_sgcd"], "final_title")
            .apply(titles())
            .unwrap();
        assert_eq!(final_titles(&df)[0].as_deref(), Some("Half-Life"));
    }

    #[test]
    fn test_falls_back_in_order() {
        let df = Coalesce::new(["title_grps", "title_sgcd"], "final_title")
            .apply(titles())
            .unwrap();
        let merged = final_titles(&df);
        assert_eq!(merged[1].as_deref(), Some("Counter-Strike: Condition Zero"));
        assert_eq!(merged[2], None);
    }

    #[test]
    fn test_missing_candidate_column_fails() {
        assert!(Coalesce::new(["title", "title_sgcd"], "final_title")
            .apply(titles())
            .is_err());
    }
}
