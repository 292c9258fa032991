//! Mean Average Precision at k.

use crate::align::{align, group_by_user};
use crate::error::Result;
use crate::types::{RankedItem, Relevance};
use crate::validate;
use std::fmt::Debug;
use std::hash::Hash;

/// Average precision per user, users in ground-truth order.
///
/// For a user with `R` ground-truth items, AP@k is
/// `(1/R) * sum(hits_so_far / rank)` over the ranks (within `k`) at which
/// a ground-truth item was predicted, visited in rank order.
pub fn average_precision_per_user<U, I>(
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
            let relevant = rows.len() as f64;
            let mut hit_ranks: Vec<usize> = rows.iter().filter_map(|r| r.rank_within(k)).collect();
            hit_ranks.sort_unstable();

            let precision_sum: f64 = hit_ranks
                .iter()
                .enumerate()
                .map(|(i, &rank)| (i + 1) as f64 / rank as f64)
                .sum();
            (user.clone(), precision_sum / relevant)
        })
        .collect())
}

/// Mean average precision over all users in the ground truth.
pub fn map_at_k_score<U, I>(
    truth: &[Relevance<U, I>],
    predictions: &[RankedItem<U, I>],
    k: usize,
) -> Result<f64>
where
    U: Eq + Hash + Clone + Debug,
    I: Eq + Hash + Clone + Debug,
{
    let scores = average_precision_per_user(truth, predictions, k)?;
    Ok(crate::mean(scores.iter().map(|(_, s)| *s), scores.len()))
}
