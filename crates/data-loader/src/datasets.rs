//! Loaders for the three raw storefront datasets.
//!
//! Each loader reads its files fully into memory and hands back a
//! [`DataFrame`] with canonical column names. Any deviation from the expected
//! columns is a hard error.

use crate::csv_io::read_csv;
use crate::error::{DataLoadError, Result};
use crate::frame::{drop_columns, rename_columns, require_columns};
use crate::parser::{app_id_column, epoch_seconds_to_datetime, refined_price_column};
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Canonical join key shared by all three datasets
pub const APP_ID: &str = "app_id";
/// Canonical reviewer column
pub const USER_ID: &str = "user_id";
pub const TIMESTAMP_CREATED: &str = "unix_timestamp_created";
pub const TIMESTAMP_UPDATED: &str = "unix_timestamp_updated";
/// Normalized price added by the game-complete loader
pub const REFINED_PRICE: &str = "refined_price";

const REVIEW_RENAMES: &[(&str, &str)] = &[("appid", APP_ID), ("steamid", USER_ID)];

const GAME_RECOMMENDATION_RENAMES: &[(&str, &str)] = &[
    ("date_release", "release_date"),
    ("price_final", "final_price"),
    ("price_original", "original_price"),
    ("win", "win_support"),
    ("mac", "mac_support"),
    ("linux", "linux_support"),
    ("steam_deck", "steam_deck_support"),
];

const GAME_COMPLETE_RENAMES: &[(&str, &str)] =
    &[("name", "title"), ("achievements", "n_game_achievements")];

const GAME_COMPLETE_COLUMNS: &[&str] = &["types", "name", "achievements", "url", "original_price"];

/// Load every review chunk in a directory.
///
/// Chunks are read in path order and stacked without deduplication; a chunk
/// with extra columns contributes nulls to the others. Every chunk must carry
/// both epoch columns, which become calendar timestamps.
pub fn load_reviews_dataset(dir: &Path) -> Result<DataFrame> {
    let chunk_paths = list_csv_files(dir)?;
    if chunk_paths.is_empty() {
        return Err(DataLoadError::NoCsvFiles {
            path: dir.display().to_string(),
        });
    }

    let mut chunks = Vec::with_capacity(chunk_paths.len());
    for path in &chunk_paths {
        let chunk = read_csv(path)?;
        for column in [TIMESTAMP_CREATED, TIMESTAMP_UPDATED] {
            if chunk.column(column).is_err() {
                return Err(DataLoadError::ChunkMissingColumn {
                    column: column.to_string(),
                    path: path.display().to_string(),
                });
            }
        }
        info!("Loaded review chunk {} ({} rows)", path.display(), chunk.height());
        chunks.push(chunk.lazy());
    }

    let stacked = concat_lf_diagonal(
        chunks,
        UnionArgs {
            to_supertypes: true,
            ..Default::default()
        },
    )?
    .collect()?;

    let mut reviews = rename_columns(stacked, REVIEW_RENAMES)?;
    for column in [TIMESTAMP_CREATED, TIMESTAMP_UPDATED] {
        let converted = epoch_seconds_to_datetime(reviews.column(column)?)?;
        reviews.with_column(converted)?;
    }

    info!(
        "Loaded {} reviews from {} files",
        reviews.height(),
        chunk_paths.len()
    );
    Ok(reviews)
}

/// Load the game-recommendations catalog (`games.csv`).
pub fn load_game_recommendations_dataset(path: &Path) -> Result<DataFrame> {
    let games = rename_columns(read_csv(path)?, GAME_RECOMMENDATION_RENAMES)?;
    let games = drop_columns(games, &["discount"])?;

    info!("Loaded {} game-recommendation rows", games.height());
    Ok(games)
}

/// Load the game-complete catalog (`steam_games.csv`).
///
/// Only `app` and `bundle` listings survive. Adds `refined_price` (numeric
/// price, null when unrecognized) and `app_id` (parsed from the listing URL;
/// a URL without an id fails the whole load).
pub fn load_games_complete_dataset(path: &Path) -> Result<DataFrame> {
    let raw = read_csv(path)?;
    require_columns(&raw, GAME_COMPLETE_COLUMNS)?;
    let total = raw.height();

    let listings = raw
        .lazy()
        .filter(col("types").eq(lit("app")).or(col("types").eq(lit("bundle"))))
        .collect()?;
    let mut games = rename_columns(listings, GAME_COMPLETE_RENAMES)?;

    let refined_price = refined_price_column(games.column("original_price")?, REFINED_PRICE)?;
    let app_ids = app_id_column(games.column("url")?, APP_ID)?;
    games.with_column(refined_price)?;
    games.with_column(app_ids)?;

    info!(
        "Loaded {} game-complete rows ({} non app/bundle listings dropped)",
        games.height(),
        total - games.height()
    );
    Ok(games)
}

fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();
    Ok(paths)
}
