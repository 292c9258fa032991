//! Normalized Discounted Cumulative Gain at k.

use crate::align::{align, group_by_user};
use crate::error::Result;
use crate::types::{AlignedRow, RankedItem, Relevance};
use crate::validate;
use std::fmt::Debug;
use std::hash::Hash;

/// NDCG@k per user, users in ground-truth order.
///
/// DCG sums `relevance / log2(rank + 1)` over the user's ground-truth items
/// ranked within the first `k` positions. IDCG is the DCG of the user's
/// relevances sorted descending and cut to `k`. Users whose IDCG is zero
/// score 0.
pub fn ndcg_per_user<U, I>(
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
        .map(|(user, rows)| (user.clone(), user_ndcg(&rows, k)))
        .collect())
}

/// Mean NDCG@k over all users in the ground truth.
pub fn ndcg_at_k_score<U, I>(
    truth: &[Relevance<U, I>],
    predictions: &[RankedItem<U, I>],
    k: usize,
) -> Result<f64>
where
    U: Eq + Hash + Clone + Debug,
    I: Eq + Hash + Clone + Debug,
{
    let scores = ndcg_per_user(truth, predictions, k)?;
    Ok(crate::mean(scores.iter().map(|(_, s)| *s), scores.len()))
}

fn discount(position: usize) -> f64 {
    ((position + 1) as f64).log2()
}

fn user_ndcg<U, I>(rows: &[&AlignedRow<U, I>], k: usize) -> f64 {
    let dcg: f64 = rows
        .iter()
        .filter_map(|row| row.rank_within(k).map(|rank| row.relevance / discount(rank)))
        .sum();

    let mut ideal: Vec<f64> = rows.iter().map(|row| row.relevance).collect();
    ideal.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let idcg: f64 = ideal
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, rel)| rel / discount(i + 1))
        .sum();

    if idcg <= 0.0 { 0.0 } else { dcg / idcg }
}
