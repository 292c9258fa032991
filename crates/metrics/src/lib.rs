//! # Metrics Crate
//!
//! Top-k ranking metrics for evaluating a recommender's output against
//! ground-truth interactions.
//!
//! ## Components
//!
//! - **align**: left join of predictions onto the ground truth by (user, item)
//! - **ndcg**: Normalized Discounted Cumulative Gain at k
//! - **mrr**: Mean Reciprocal Rank at k
//! - **map**: Mean Average Precision at k
//! - **frame**: build typed inputs from a polars `DataFrame`
//!
//! All metrics share the same conventions: users are those present in the
//! ground truth, only predictions ranked within the first `k` positions
//! count, and users with no such prediction score 0.
//!
//! ## Example Usage
//!
//! ```ignore
//! use metrics::{evaluate, RankedItem, Relevance};
//!
//! let truth = vec![Relevance::new(1, "A"), Relevance::new(1, "B")];
//! let predictions = vec![RankedItem::new(1, "A", 1), RankedItem::new(1, "B", 2)];
//!
//! let report = evaluate(&truth, &predictions, 10)?;
//! assert_eq!(report.map, 1.0);
//! ```

pub mod align;
pub mod error;
pub mod frame;
pub mod map;
pub mod mrr;
pub mod ndcg;
pub mod types;

// Re-export commonly used types
pub use align::align;
pub use error::{MetricsError, Result};
pub use frame::{ranked_items_from_frame, relevance_from_frame, DEFAULT_RANK_COLUMN};
pub use map::{average_precision_per_user, map_at_k_score};
pub use mrr::{mrr_at_k_score, reciprocal_rank_per_user};
pub use ndcg::{ndcg_at_k_score, ndcg_per_user};
pub use types::{AlignedRow, Key, MetricsReport, RankedItem, Relevance};

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::info;

/// Default cutoff used when callers don't pick one
pub const DEFAULT_K: usize = 10;

/// Compute NDCG@k, MRR@k and MAP@k in one go.
pub fn evaluate<U, I>(
    truth: &[Relevance<U, I>],
    predictions: &[RankedItem<U, I>],
    k: usize,
) -> Result<MetricsReport>
where
    U: Eq + Hash + Clone + Debug,
    I: Eq + Hash + Clone + Debug,
{
    let users = truth.iter().map(|t| &t.user).collect::<HashSet<_>>().len();
    let report = MetricsReport {
        k,
        users,
        ndcg: ndcg_at_k_score(truth, predictions, k)?,
        mrr: mrr_at_k_score(truth, predictions, k)?,
        map: map_at_k_score(truth, predictions, k)?,
    };
    info!(
        "Evaluated {} users at k={}: ndcg={:.4} mrr={:.4} map={:.4}",
        report.users, report.k, report.ndcg, report.mrr, report.map
    );
    Ok(report)
}

pub(crate) fn validate<U, I>(truth: &[Relevance<U, I>], k: usize) -> Result<()> {
    if k == 0 {
        return Err(MetricsError::InvalidCutoff { k });
    }
    if truth.is_empty() {
        return Err(MetricsError::EmptyGroundTruth);
    }
    Ok(())
}

pub(crate) fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}
