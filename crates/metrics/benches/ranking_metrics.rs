//! Benchmarks for the ranking metrics
//!
//! Run with: cargo bench --package metrics
//!
//! Uses a synthetic evaluation set: 5,000 users with 20 relevant items
//! each and 50 ranked predictions each.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metrics::{
    evaluate, map_at_k_score, mrr_at_k_score, ndcg_at_k_score, RankedItem, Relevance,
};

const USERS: u64 = 5_000;
const RELEVANT_PER_USER: u64 = 20;
const PREDICTIONS_PER_USER: u64 = 50;

fn synthetic_data() -> (Vec<Relevance<u64, u64>>, Vec<RankedItem<u64, u64>>) {
    let mut truth = Vec::new();
    let mut predictions = Vec::new();
    for user in 0..USERS {
        for i in 0..RELEVANT_PER_USER {
            truth.push(Relevance::new(user, (user * 7 + i * 3) % 500));
        }
        for rank in 1..=PREDICTIONS_PER_USER {
            predictions.push(RankedItem::new(user, (user * 11 + rank * 5) % 500, rank as usize));
        }
    }
    (truth, predictions)
}

fn bench_individual_metrics(c: &mut Criterion) {
    let (truth, predictions) = synthetic_data();

    c.bench_function("ndcg_at_10", |b| {
        b.iter(|| ndcg_at_k_score(black_box(&truth), black_box(&predictions), 10).unwrap())
    });
    c.bench_function("mrr_at_10", |b| {
        b.iter(|| mrr_at_k_score(black_box(&truth), black_box(&predictions), 10).unwrap())
    });
    c.bench_function("map_at_10", |b| {
        b.iter(|| map_at_k_score(black_box(&truth), black_box(&predictions), 10).unwrap())
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let (truth, predictions) = synthetic_data();

    c.bench_function("evaluate_at_10", |b| {
        b.iter(|| {
            let report = evaluate(black_box(&truth), black_box(&predictions), 10).unwrap();
            black_box(report)
        })
    });
}

criterion_group!(benches, bench_individual_metrics, bench_evaluate);
criterion_main!(benches);
