//! Transform implementations for the frame pipeline.
//!
//! This module contains all the concrete transforms that can be composed
//! into a TransformPipeline.

pub mod coalesce;
pub mod dedup;
pub mod drop_columns;
pub mod impute;

// Re-export for convenience
pub use coalesce::Coalesce;
pub use dedup::{DedupPolicy, Deduplicate};
pub use drop_columns::DropColumns;
pub use impute::ImputeMissingValues;
