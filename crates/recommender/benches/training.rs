//! Benchmarks for SVD training and ranking
//!
//! Run with: cargo bench --package recommender
//!
//! Synthetic ratings keep the benchmark hermetic; sizes are scaled down
//! from ml-100k so a run stays in seconds.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::Rating;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recommender::{Svd, Trainer, Trainset, top_n};

fn synthetic_ratings(n_users: u32, n_items: u32, per_user: usize) -> Vec<Rating> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut ratings = Vec::with_capacity(n_users as usize * per_user);
    for user_id in 1..=n_users {
        for _ in 0..per_user {
            ratings.push(Rating {
                user_id,
                item_id: rng.random_range(1..=n_items),
                rating: rng.random_range(1..=5) as f32,
                timestamp: 0,
            });
        }
    }
    ratings
}

fn bench_fit(c: &mut Criterion) {
    let ratings = synthetic_ratings(200, 400, 50);
    let svd = Svd::default()
        .with_n_factors(20)
        .with_n_epochs(5)
        .with_seed(42);

    c.bench_function("svd_fit_10k_ratings", |b| {
        b.iter(|| {
            let trainset = Trainset::from_ratings(black_box(&ratings), (1.0, 5.0)).unwrap();
            black_box(svd.fit(trainset))
        })
    });
}

fn bench_trainset_build(c: &mut Criterion) {
    let ratings = synthetic_ratings(200, 400, 50);

    c.bench_function("trainset_from_10k_ratings", |b| {
        b.iter(|| {
            let trainset = Trainset::from_ratings(black_box(&ratings), (1.0, 5.0)).unwrap();
            black_box(trainset)
        })
    });
}

fn bench_top_n(c: &mut Criterion) {
    let ratings = synthetic_ratings(200, 400, 50);
    let svd = Svd::default()
        .with_n_factors(20)
        .with_n_epochs(5)
        .with_seed(42);
    let model = svd.fit(Trainset::from_ratings(&ratings, (1.0, 5.0)).unwrap());

    c.bench_function("top_n_over_400_items", |b| {
        b.iter(|| {
            let ranked = top_n(&model, black_box(1), black_box(5)).unwrap();
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_fit, bench_trainset_build, bench_top_n);
criterion_main!(benches);
