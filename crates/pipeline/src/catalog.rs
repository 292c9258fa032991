//! Merge of the two game catalogs into one row per game.
//!
//! Price-after-discount, rating, positive ratio and review counts are
//! popularity outcomes and never reach the joined table.

use crate::transform_pipeline::TransformPipeline;
use crate::transforms::{Coalesce, DropColumns};
use anyhow::{Context, Result};
use data_loader::datasets::APP_ID;
use data_loader::{join_frames, JoinKind, Suffixes};
use polars::prelude::DataFrame;
use tracing::info;

/// Suffix for colliding columns that came from the game-complete catalog
pub const COMPLETE_SUFFIX: &str = "_sgcd";
/// Suffix for colliding columns that came from the game-recommendations catalog
pub const RECOMMENDATIONS_SUFFIX: &str = "_grps";
/// Canonical title column added by the join
pub const CANONICAL_TITLE: &str = "final_title";

/// Columns removed after the join: the listing URL, free-text requirements,
/// label-leaking popularity signals, and the redundant second original price.
pub const EXCLUDED_COLUMNS: &[&str] = &[
    "url",
    "minimum_requirements",
    "recommended_requirements",
    "discount_price",
    "user_reviews",
    "rating",
    "positive_ratio",
    "final_price",
    "original_price_grps",
];

/// Candidate title columns, most trusted first.
pub const TITLE_SOURCES: &[&str] = &["title_grps", "title_sgcd"];

/// Outer-join the game-complete catalog with the game-recommendations
/// catalog on `app_id`, drop the excluded columns, and add `final_title`.
pub fn join_catalogs(
    games_complete: &DataFrame,
    game_recommendations: &DataFrame,
) -> Result<DataFrame> {
    let joined = join_frames(
        games_complete.clone(),
        game_recommendations.clone(),
        APP_ID,
        JoinKind::Outer,
        Suffixes::new(COMPLETE_SUFFIX, RECOMMENDATIONS_SUFFIX),
    )
    .context("Failed to join game catalogs on app_id")?;

    let catalog = catalog_transforms().apply(joined)?;

    info!(
        "Joined catalog: {} games x {} columns",
        catalog.height(),
        catalog.width()
    );
    Ok(catalog)
}

fn catalog_transforms() -> TransformPipeline {
    TransformPipeline::new()
        .add_transform(DropColumns::new(EXCLUDED_COLUMNS.iter().copied()))
        .add_transform(Coalesce::new(TITLE_SOURCES.iter().copied(), CANONICAL_TITLE))
}
