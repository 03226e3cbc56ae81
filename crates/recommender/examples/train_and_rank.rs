//! Example: Evaluate and rank with the SVD recommender
//!
//! Run with: cargo run --package recommender --example train_and_rank
//!
//! This example shows how to:
//! 1. Build a ratings list
//! 2. Evaluate the model with k-fold cross-validation
//! 3. Fit on the full trainset
//! 4. Rank the best unrated items for one user

use data_loader::Rating;
use recommender::{KFold, Svd, Trainer, Trainset, cross_validate, top_n};
use std::time::Instant;

fn main() -> recommender::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== SVD Train-and-Rank Example ===\n");

    // Synthetic two-taste dataset: even users love items 1-8, odd users
    // love items 9-16. Every user skips a few items so there is always
    // something left to recommend.
    let mut ratings = Vec::new();
    for user_id in 1..=30u32 {
        for item_id in 1..=16u32 {
            if (user_id + item_id) % 5 == 0 {
                continue;
            }
            let loves_low_items = user_id % 2 == 0;
            let value = if (item_id <= 8) == loves_low_items { 5.0 } else { 1.0 };
            ratings.push(Rating {
                user_id,
                item_id,
                rating: value,
                timestamp: 0,
            });
        }
    }
    println!("Ratings: {}", ratings.len());

    let svd = Svd::default()
        .with_n_factors(20)
        .with_n_epochs(30)
        .with_seed(42);

    // Evaluate with cross-validation
    println!("\nEvaluating with 5-fold cross-validation...");
    let start = Instant::now();
    let report = cross_validate(&svd, &ratings, (1.0, 5.0), &KFold::default().with_seed(42))?;
    println!("Evaluated in {:?}", start.elapsed());
    println!("  Mean RMSE: {:.4}", report.mean_rmse());
    println!("  Mean MAE:  {:.4}", report.mean_mae());

    // Fit on the full trainset
    println!("\nFitting on the full trainset...");
    let start = Instant::now();
    let trainset = Trainset::from_ratings(&ratings, (1.0, 5.0))?;
    println!(
        "  Users: {}, items: {}, ratings: {}",
        trainset.n_users(),
        trainset.n_items(),
        trainset.n_ratings()
    );
    let model = svd.fit(trainset);
    println!("Fitted in {:?}", start.elapsed());

    // Rank unrated items for one user
    let user_id = 4;
    let recommendations = top_n(&model, user_id, 5)?;
    println!("\nTop {} items for user {}:", recommendations.len(), user_id);
    for (i, rec) in recommendations.iter().enumerate() {
        println!("  {}. Item {} (Score: {:.2})", i + 1, rec.item_id, rec.score);
    }

    Ok(())
}
