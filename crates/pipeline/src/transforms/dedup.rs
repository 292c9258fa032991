//! Row deduplication over a key made of several columns.
//!
//! Review chunks overlap, so the same review can show up more than once.
//! [`DedupPolicy`] picks the surviving copy.

use crate::traits::TableTransform;
use anyhow::Result;
use data_loader::require_columns;
use polars::prelude::*;
use tracing::warn;

/// Which copy of a duplicated row is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Keep every row, duplicates included
    #[default]
    KeepAll,
    /// Keep the earliest occurrence
    KeepFirst,
    /// Keep the latest occurrence
    KeepLast,
}

/// Removes rows whose key columns repeat an earlier (or later) row.
///
/// Null key cells compare equal to each other. Surviving rows keep their
/// original relative order.
pub struct Deduplicate {
    keys: Vec<String>,
    policy: DedupPolicy,
}

impl Deduplicate {
    pub fn new<S: Into<String>>(keys: impl IntoIterator<Item = S>, policy: DedupPolicy) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            policy,
        }
    }
}

impl TableTransform for Deduplicate {
    fn name(&self) -> &str {
        "Deduplicate"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let names: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        require_columns(&df, &names)?;

        let key = as_struct(names.iter().map(|name| col(*name)).collect());
        let survivors = match self.policy {
            DedupPolicy::KeepAll => return Ok(df),
            DedupPolicy::KeepFirst => key.is_first_distinct(),
            DedupPolicy::KeepLast => key.is_last_distinct(),
        };

        let before = df.height();
        let df = df.lazy().filter(survivors).collect()?;

        let removed = before - df.height();
        if removed > 0 {
            warn!(
                "Removed {} duplicate rows on ({}) using {:?}",
                removed,
                self.keys.join(", "),
                self.policy
            );
        }
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviews() -> DataFrame {
        df!(
            "app_id" => [10i64, 10, 10, 20, 20],
            "user_id" => [1i64, 2, 1, 1, 1],
            "created" => [Some(100i64), Some(100), Some(100), None, None],
            "review" => ["first", "other user", "second", "no date", "no date again"],
        )
        .unwrap()
    }

    fn review_texts(df: &DataFrame) -> Vec<String> {
        df.column("review")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect()
    }

    const KEYS: [&str; 3] = ["app_id", "user_id", "created"];

    #[test]
    fn test_default_keeps_everything() {
        assert_eq!(DedupPolicy::default(), DedupPolicy::KeepAll);
        let df = Deduplicate::new(KEYS, DedupPolicy::default())
            .apply(reviews())
            .unwrap();
        assert_eq!(df.height(), 5);
    }

    #[test]
    fn test_keep_first() {
        let df = Deduplicate::new(KEYS, DedupPolicy::KeepFirst)
            .apply(reviews())
            .unwrap();
        assert_eq!(review_texts(&df), vec!["first", "other user", "no date"]);
    }

    #[test]
    fn test_keep_last_preserves_order() {
        let df = Deduplicate::new(KEYS, DedupPolicy::KeepLast)
            .apply(reviews())
            .unwrap();
        assert_eq!(review_texts(&df), vec!["other user", "second", "no date again"]);
    }

    #[test]
    fn test_missing_key_column() {
        let err = Deduplicate::new(["app_id", "steamid"], DedupPolicy::KeepFirst).apply(reviews());
        assert!(err.is_err());
    }
}
