//! Inputs and outputs of the ranking metrics.

use serde::Serialize;
use std::fmt;

/// A user or item identifier read from a data frame.
///
/// Integer columns become `Int` and text columns `Str`; the two never
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(v) => write!(f, "{v}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

/// One relevant (user, item) pair from the ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Relevance<U, I> {
    pub user: U,
    pub item: I,
    /// Graded relevance; binary ground truth uses 1.0
    pub relevance: f64,
}

impl<U, I> Relevance<U, I> {
    /// A binary-relevance ground-truth entry
    pub fn new(user: U, item: I) -> Self {
        Self {
            user,
            item,
            relevance: 1.0,
        }
    }

    pub fn graded(user: U, item: I, relevance: f64) -> Self {
        Self {
            user,
            item,
            relevance,
        }
    }
}

/// One predicted (user, item) pair and its 1-based position in the user's list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem<U, I> {
    pub user: U,
    pub item: I,
    pub rank: usize,
}

impl<U, I> RankedItem<U, I> {
    pub fn new(user: U, item: I, rank: usize) -> Self {
        Self { user, item, rank }
    }
}

/// A ground-truth row with the rank the model gave it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow<U, I> {
    pub user: U,
    pub item: I,
    pub relevance: f64,
    /// `None` when the model never ranked this item for this user
    pub rank: Option<usize>,
}

impl<U, I> AlignedRow<U, I> {
    /// Rank, if the item was ranked within the first `k` positions.
    pub fn rank_within(&self, k: usize) -> Option<usize> {
        self.rank.filter(|&r| r <= k)
    }
}

/// All three scores for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub k: usize,
    /// Number of users in the ground truth
    pub users: usize,
    pub ndcg: f64,
    pub mrr: f64,
    pub map: f64,
}
