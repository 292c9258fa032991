//! Mean Reciprocal Rank at k.

use crate::align::{align, group_by_user};
use crate::error::Result;
use crate::types::{RankedItem, Relevance};
use crate::validate;
use std::fmt::Debug;
use std::hash::Hash;

/// Reciprocal rank per user, users in ground-truth order.
///
/// A user's reciprocal rank is `1 / best_rank` over their ground-truth
/// items ranked within the first `k` positions, or 0 when none are.
pub fn reciprocal_rank_per_user<U, I>(
    truth: &[Relevance<U, I>],
    predictions: &[RankedItem<U, I>],
    k: usize,
) -> Result<Vec<(U, f64)>>
where
    U: Eq + Hash + Clone + Debug,
    I: Eq + Hash + Clone + Debug,
{
    validate(truth, k)?;
    let aligned = align(truth, predictions)?;

    Ok(group_by_user(&aligned)
        .into_iter()
        .map(|(user, rows)| {
            let rr = rows
                .iter()
                .filter_map(|row| row.rank_within(k))
                .min()
                .map(|best| 1.0 / best as f64)
                .unwrap_or(0.0);
            (user.clone(), rr)
        })
        .collect())
}

/// Mean reciprocal rank over all users in the ground truth.
pub fn mrr_at_k_score<U, I>(
    truth: &[Relevance<U, I>],
    predictions: &[RankedItem<U, I>],
    k: usize,
) -> Result<f64>
where
    U: Eq + Hash + Clone + Debug,
    I: Eq + Hash + Clone + Debug,
{
    let scores = reciprocal_rank_per_user(truth, predictions, k)?;
    Ok(crate::mean(scores.iter().map(|(_, s)| *s), scores.len()))
}
