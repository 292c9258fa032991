//! Core traits for the frame-transform pipeline.

use anyhow::Result;
use polars::prelude::DataFrame;

/// One reshaping step over a whole data frame.
///
/// Transforms take the frame by value and hand back the reshaped one.
pub trait TableTransform {
    /// Returns the name of this transform (for logging/debugging)
    fn name(&self) -> &str;

    /// Fails when the frame breaks the transform's input contract.
    fn apply(&self, df: DataFrame) -> Result<DataFrame>;
}
