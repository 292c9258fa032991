//! Strict reshaping and suffixed joins over polars data frames.
//!
//! Polars' own `rename`/`drop` already refuse unknown columns; the helpers
//! here check up front so callers get a [`DataLoadError::ColumnNotFound`]
//! naming the column instead of a generic frame error.

use crate::error::{DataLoadError, Result};
use polars::prelude::*;
use std::collections::HashSet;

/// Which unmatched rows survive a join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Only rows whose key appears on both sides
    Inner,
    /// Every left row; unmatched ones get nulls on the right
    Left,
    /// Every row from both sides
    Outer,
}

impl From<JoinKind> for JoinType {
    fn from(kind: JoinKind) -> Self {
        match kind {
            JoinKind::Inner => JoinType::Inner,
            JoinKind::Left => JoinType::Left,
            JoinKind::Outer => JoinType::Full,
        }
    }
}

/// Suffixes appended to non-key column names present on both sides.
#[derive(Debug, Clone, Copy)]
pub struct Suffixes<'a> {
    pub left: &'a str,
    pub right: &'a str,
}

impl<'a> Suffixes<'a> {
    pub fn new(left: &'a str, right: &'a str) -> Self {
        Self { left, right }
    }
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|c| c.to_string()).collect()
}

/// Fail with `ColumnNotFound` for the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    match columns.iter().find(|c| df.column(c).is_err()) {
        Some(missing) => Err(DataLoadError::ColumnNotFound {
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}

/// Rename columns. Every source column must exist.
pub fn rename_columns(mut df: DataFrame, renames: &[(&str, &str)]) -> Result<DataFrame> {
    let sources: Vec<&str> = renames.iter().map(|(from, _)| *from).collect();
    require_columns(&df, &sources)?;
    for (from, to) in renames {
        df.rename(from, (*to).into())?;
    }
    Ok(df)
}

/// Remove columns. Every listed column must exist.
pub fn drop_columns(df: DataFrame, names: &[&str]) -> Result<DataFrame> {
    require_columns(&df, names)?;
    let mut df = df;
    for name in names {
        df = df.drop(name)?;
    }
    Ok(df)
}

/// Join `right` onto `left` on the column `on`, which both sides must have.
///
/// Output columns are the left columns (the key appears once) followed by
/// the right side's non-key columns. A non-key name present on both sides
/// gets the matching suffix on each side; an empty suffix leaves that side's
/// name alone. Every matching pair of rows yields an output row. For
/// [`JoinKind::Outer`] the key is filled from whichever side has it.
pub fn join_frames(
    left: DataFrame,
    right: DataFrame,
    on: &str,
    kind: JoinKind,
    suffixes: Suffixes<'_>,
) -> Result<DataFrame> {
    require_columns(&left, &[on])?;
    require_columns(&right, &[on])?;

    let left_names = column_names(&left);
    let right_names = column_names(&right);
    let shared: Vec<String> = left_names
        .iter()
        .filter(|c| c.as_str() != on && right_names.contains(c))
        .cloned()
        .collect();

    let suffixed = |name: &String, suffix: &str| {
        if shared.contains(name) {
            format!("{name}{suffix}")
        } else {
            name.clone()
        }
    };
    let mut output_names: HashSet<String> = HashSet::new();
    let planned = left_names
        .iter()
        .map(|c| suffixed(c, suffixes.left))
        .chain(
            right_names
                .iter()
                .filter(|c| c.as_str() != on)
                .map(|c| suffixed(c, suffixes.right)),
        );
    for name in planned {
        if !output_names.insert(name.clone()) {
            return Err(DataLoadError::ColumnCollision { column: name });
        }
    }

    let (mut left, mut right) = (left, right);
    for name in &shared {
        if !suffixes.left.is_empty() {
            left.rename(name, format!("{name}{}", suffixes.left).into())?;
        }
        if !suffixes.right.is_empty() {
            right.rename(name, format!("{name}{}", suffixes.right).into())?;
        }
    }

    let args = JoinArgs::new(kind.into()).with_coalesce(JoinCoalesce::CoalesceColumns);
    let joined = left
        .lazy()
        .join(right.lazy(), [col(on)], [col(on)], args)
        .collect()?;
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> DataFrame {
        df!(
            "app_id" => [10i64, 70],
            "title" => ["Counter-Strike", "Half-Life (1998)"],
            "price" => [9.99, 9.99],
        )
        .unwrap()
    }

    fn recommendations() -> DataFrame {
        df!(
            "app_id" => [70i64, 220],
            "title" => ["Half-Life", "Half-Life 2"],
            "rating" => ["Very Positive", "Overwhelmingly Positive"],
        )
        .unwrap()
    }

    fn title_for(df: &DataFrame, app_id: i64, column: &str) -> Option<String> {
        let ids = df.column("app_id").unwrap().i64().unwrap();
        let row = ids.into_iter().position(|id| id == Some(app_id)).unwrap();
        df.column(column)
            .unwrap()
            .str()
            .unwrap()
            .get(row)
            .map(str::to_string)
    }

    #[test]
    fn test_suffixes_only_on_collisions() {
        let joined = join_frames(
            games(),
            recommendations(),
            "app_id",
            JoinKind::Left,
            Suffixes::new("_l", "_r"),
        )
        .unwrap();
        assert_eq!(
            column_names(&joined),
            ["app_id", "title_l", "price", "title_r", "rating"].map(String::from)
        );
    }

    #[test]
    fn test_left_join_keeps_unmatched_left_rows() {
        let joined = join_frames(
            games(),
            recommendations(),
            "app_id",
            JoinKind::Left,
            Suffixes::new("_l", "_r"),
        )
        .unwrap();
        assert_eq!(joined.height(), 2);
        assert_eq!(title_for(&joined, 10, "title_r"), None);
        assert_eq!(title_for(&joined, 70, "title_r").as_deref(), Some("Half-Life"));
    }

    #[test]
    fn test_outer_join_keeps_both_sides() {
        let joined = join_frames(
            games(),
            recommendations(),
            "app_id",
            JoinKind::Outer,
            Suffixes::new("_l", "_r"),
        )
        .unwrap();
        assert_eq!(joined.height(), 3);
        assert_eq!(title_for(&joined, 220, "title_l"), None);
        assert_eq!(title_for(&joined, 220, "title_r").as_deref(), Some("Half-Life 2"));
    }

    #[test]
    fn test_inner_join() {
        let joined = join_frames(
            games(),
            recommendations(),
            "app_id",
            JoinKind::Inner,
            Suffixes::new("_l", "_r"),
        )
        .unwrap();
        assert_eq!(joined.height(), 1);
    }

    #[test]
    fn test_one_to_many_replicates_right_row() {
        let reviews = df!(
            "app_id" => [70i64, 70, 999],
            "review" => ["great", "classic", "unknown game"],
        )
        .unwrap();
        let joined = join_frames(
            reviews,
            games(),
            "app_id",
            JoinKind::Left,
            Suffixes::new("srd", ""),
        )
        .unwrap();
        assert_eq!(joined.height(), 3);
        let titles: Vec<Option<&str>> = joined.column("title").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(titles.iter().filter(|t| **t == Some("Half-Life (1998)")).count(), 2);
        assert_eq!(titles.iter().filter(|t| t.is_none()).count(), 1);
    }

    #[test]
    fn test_empty_suffixes_on_collision_fail() {
        let err = join_frames(
            games(),
            recommendations(),
            "app_id",
            JoinKind::Left,
            Suffixes::new("", ""),
        )
        .unwrap_err();
        assert!(matches!(err, DataLoadError::ColumnCollision { column } if column == "title"));
    }

    #[test]
    fn test_missing_join_column() {
        let err = join_frames(
            games(),
            recommendations(),
            "appid",
            JoinKind::Left,
            Suffixes::new("_l", "_r"),
        )
        .unwrap_err();
        assert!(matches!(err, DataLoadError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_rename_and_drop_are_strict() {
        let renamed = rename_columns(games(), &[("title", "name")]).unwrap();
        assert!(renamed.column("name").is_ok());

        let err = rename_columns(games(), &[("missing", "x")]).unwrap_err();
        assert!(matches!(err, DataLoadError::ColumnNotFound { column } if column == "missing"));

        let dropped = drop_columns(games(), &["price"]).unwrap();
        assert_eq!(column_names(&dropped), ["app_id", "title"].map(String::from));
        assert!(drop_columns(games(), &["discount"]).is_err());
    }
}
