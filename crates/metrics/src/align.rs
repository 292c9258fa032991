//! Left join of predictions onto the ground truth by (user, item).

use crate::error::{MetricsError, Result};
use crate::types::{AlignedRow, RankedItem, Relevance};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Attach each ground-truth row's predicted rank.
///
/// Each distinct ground-truth (user, item) appears exactly once, in
/// first-seen order; repeated truth rows collapse to the highest relevance
/// among them. Rows the model didn't rank get `rank: None`. If the
/// predictions rank the same (user, item) more than once, the best (lowest)
/// rank is used.
pub fn align<U, I>(
    truth: &[Relevance<U, I>],
    predictions: &[RankedItem<U, I>],
) -> Result<Vec<AlignedRow<U, I>>>
where
    U: Eq + Hash + Clone + Debug,
    I: Eq + Hash + Clone + Debug,
{
    let mut best_rank: HashMap<(&U, &I), usize> = HashMap::with_capacity(predictions.len());
    for p in predictions {
        if p.rank == 0 {
            return Err(MetricsError::InvalidRank {
                user: format!("{:?}", p.user),
                item: format!("{:?}", p.item),
                rank: p.rank,
            });
        }
        best_rank
            .entry((&p.user, &p.item))
            .and_modify(|r| *r = (*r).min(p.rank))
            .or_insert(p.rank);
    }

    let mut position: HashMap<(&U, &I), usize> = HashMap::with_capacity(truth.len());
    let mut rows: Vec<AlignedRow<U, I>> = Vec::with_capacity(truth.len());
    for t in truth {
        let seen = position.get(&(&t.user, &t.item)).copied();
        match seen {
            Some(idx) => rows[idx].relevance = rows[idx].relevance.max(t.relevance),
            None => {
                position.insert((&t.user, &t.item), rows.len());
                rows.push(AlignedRow {
                    user: t.user.clone(),
                    item: t.item.clone(),
                    relevance: t.relevance,
                    rank: best_rank.get(&(&t.user, &t.item)).copied(),
                });
            }
        }
    }
    Ok(rows)
}

/// Group aligned rows by user, users in first-seen order.
pub(crate) fn group_by_user<U, I>(rows: &[AlignedRow<U, I>]) -> Vec<(&U, Vec<&AlignedRow<U, I>>)>
where
    U: Eq + Hash,
{
    let mut position: HashMap<&U, usize> = HashMap::new();
    let mut groups: Vec<(&U, Vec<&AlignedRow<U, I>>)> = Vec::new();
    for row in rows {
        let idx = *position.entry(&row.user).or_insert_with(|| {
            groups.push((&row.user, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(row);
    }
    groups
}
