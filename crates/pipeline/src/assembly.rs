//! Final assembly: one output row per (deduplicated) review, with the
//! joined catalog's attributes attached.

use crate::traits::TableTransform;
use crate::transforms::{DedupPolicy, Deduplicate, ImputeMissingValues};
use anyhow::{Context, Result};
use data_loader::datasets::{APP_ID, TIMESTAMP_CREATED, USER_ID};
use data_loader::{join_frames, JoinKind, Suffixes};
use polars::prelude::*;
use std::collections::HashSet;
use tracing::{info, warn};

/// Suffix for review-side columns that collide with catalog columns
pub const REVIEWS_SUFFIX: &str = "srd";

/// Columns identifying a single review across overlapping chunks
pub const REVIEW_KEY: [&str; 3] = [APP_ID, USER_ID, TIMESTAMP_CREATED];

/// Attach catalog attributes to every review.
///
/// Reviews are deduplicated per `policy`, then left-joined with the catalog
/// and ordered by `app_id`: reviews of games the catalog lacks keep null
/// catalog fields, and a game's attributes repeat on each of its reviews.
pub fn assemble_dataset(
    reviews: DataFrame,
    catalog: &DataFrame,
    policy: DedupPolicy,
) -> Result<DataFrame> {
    let reviews = Deduplicate::new(REVIEW_KEY, policy)
        .apply(reviews)
        .context("Failed to deduplicate reviews")?;
    let reviews = sort_by_app_id(reviews).context("Failed to sort reviews by app_id")?;

    log_unmatched_reviews(&reviews, catalog)?;

    let joined = join_frames(
        reviews,
        catalog.clone(),
        APP_ID,
        JoinKind::Left,
        Suffixes::new(REVIEWS_SUFFIX, ""),
    )
    .context("Failed to join reviews with the game catalog")?;
    let joined = sort_by_app_id(joined)?;

    let dataset = impute_missing_values(joined, TIMESTAMP_CREATED)?;
    info!(
        "Assembled dataset: {} rows x {} columns",
        dataset.height(),
        dataset.width()
    );
    Ok(dataset)
}

/// Null-handling hook; currently returns the frame unchanged.
pub fn impute_missing_values(df: DataFrame, timestamp_col: &str) -> Result<DataFrame> {
    ImputeMissingValues::new(timestamp_col).apply(df)
}

/// Stable ascending sort on `app_id`, nulls last.
fn sort_by_app_id(df: DataFrame) -> Result<DataFrame> {
    let sorted = df
        .lazy()
        .sort(
            [APP_ID],
            SortMultipleOptions::default()
                .with_maintain_order(true)
                .with_nulls_last(true),
        )
        .collect()?;
    Ok(sorted)
}

fn app_ids(df: &DataFrame) -> Result<Vec<Option<i64>>> {
    let ids = df.column(APP_ID)?.cast(&DataType::Int64)?;
    Ok(ids.i64()?.into_iter().collect())
}

fn log_unmatched_reviews(reviews: &DataFrame, catalog: &DataFrame) -> Result<()> {
    let catalog_ids: HashSet<i64> = app_ids(catalog)?.into_iter().flatten().collect();
    let unmatched = app_ids(reviews)?
        .into_iter()
        .filter(|id| id.is_none_or(|id| !catalog_ids.contains(&id)))
        .count();
    if unmatched > 0 {
        warn!(
            "{} of {} reviews refer to games missing from the catalog",
            unmatched,
            reviews.height()
        );
    }
    Ok(())
}
