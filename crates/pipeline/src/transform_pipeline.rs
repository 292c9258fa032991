//! The TransformPipeline chains frame transforms with a builder.

use crate::traits::TableTransform;
use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing;

/// Chains multiple transforms together into a processing pipeline.
///
/// ```ignore
/// let pipeline = TransformPipeline::new()
///     .add_transform(DropColumns::new(["url", "rating"]))
///     .add_transform(Coalesce::new(["title_grps", "title_sgcd"], "final_title"));
///
/// let reshaped = pipeline.apply(joined)?;
/// ```
pub struct TransformPipeline {
    transforms: Vec<Box<dyn TableTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline (builder pattern).
    pub fn add_transform(mut self, transform: impl TableTransform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Apply all transforms in sequence.
    ///
    /// The first failing transform aborts the run; its name is attached to
    /// the error.
    pub fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let mut current = df;
        for transform in &self.transforms {
            tracing::debug!(
                "Applying transform: {} (input: {} rows x {} columns)",
                transform.name(),
                current.height(),
                current.width()
            );
            current = transform
                .apply(current)
                .with_context(|| format!("{} failed", transform.name()))?;
            tracing::debug!(
                "Transform applied: {} (output: {} rows x {} columns)",
                transform.name(),
                current.height(),
                current.width()
            );
        }
        Ok(current)
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
