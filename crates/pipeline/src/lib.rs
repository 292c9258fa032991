//! Pipeline that turns the raw storefront datasets into one analysis-ready
//! data frame.
//!
//! This crate provides:
//! - TableTransform trait and implementations for reshaping data frames
//! - TransformPipeline for composing transforms
//! - The catalog join and the final review assembly
//! - PipelineConfig and the end-to-end `run`
//!
//! ## Architecture
//! The pipeline processes data frames in stages:
//! 1. Loaders read the three datasets (see `data_loader::datasets`)
//! 2. The two game catalogs are outer-joined into one catalog
//! 3. Reviews are deduplicated, sorted and left-joined with the catalog
//! 4. The result is written as CSV
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{run, PipelineConfig};
//!
//! let config = PipelineConfig::default().with_output_csv("out/joined.csv");
//! let summary = run(&config)?;
//! println!("wrote {} rows", summary.output_rows);
//! ```

pub mod assembly;
pub mod catalog;
pub mod config;
pub mod traits;
pub mod transform_pipeline;
pub mod transforms;

// Re-export main types
pub use assembly::{assemble_dataset, impute_missing_values};
pub use catalog::join_catalogs;
pub use config::PipelineConfig;
pub use traits::TableTransform;
pub use transform_pipeline::TransformPipeline;
pub use transforms::DedupPolicy;

use anyhow::{Context, Result};
use data_loader::datasets::{
    load_game_recommendations_dataset, load_games_complete_dataset, load_reviews_dataset,
};
use data_loader::write_csv;
use std::path::PathBuf;
use tracing::info;

/// Counts reported after a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub reviews: usize,
    pub catalog_games: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub output_path: PathBuf,
}

/// Load, join and write, as configured.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    info!("Loading reviews from {}", config.reviews_dir.display());
    let reviews = load_reviews_dataset(&config.reviews_dir)
        .with_context(|| format!("Failed to load reviews from {}", config.reviews_dir.display()))?;

    let game_recommendations = load_game_recommendations_dataset(&config.game_recommendations_csv)
        .with_context(|| {
            format!(
                "Failed to load game recommendations from {}",
                config.game_recommendations_csv.display()
            )
        })?;

    let games_complete = load_games_complete_dataset(&config.games_complete_csv).with_context(
        || {
            format!(
                "Failed to load game-complete catalog from {}",
                config.games_complete_csv.display()
            )
        },
    )?;

    let review_count = reviews.height();
    let catalog = join_catalogs(&games_complete, &game_recommendations)?;
    let mut dataset = assemble_dataset(reviews, &catalog, config.dedup_policy)?;

    write_csv(&mut dataset, &config.output_csv)
        .with_context(|| format!("Failed to write {}", config.output_csv.display()))?;
    info!("Wrote joined dataset to {}", config.output_csv.display());

    Ok(RunSummary {
        reviews: review_count,
        catalog_games: catalog.height(),
        output_rows: dataset.height(),
        output_columns: dataset.width(),
        output_path: config.output_csv.clone(),
    })
}
