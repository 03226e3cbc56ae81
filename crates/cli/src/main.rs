use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{BuiltinDataset, Dataset, ItemCatalog, ItemId, UserId};
use recommender::{KFold, RankedItem, Svd, Trainer, Trainset, cross_validate, top_n};
use std::path::PathBuf;
use std::time::Instant;

/// SVD movie recommendations over the MovieLens 100k dataset
#[derive(Parser)]
#[command(name = "svd-recs")]
#[command(about = "Matrix-factorization movie recommendations", long_about = None)]
struct Cli {
    /// Builtin dataset identifier
    #[arg(long, default_value = "ml-100k")]
    dataset: String,

    /// Path to the dataset directory (defaults to data/<dataset>)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// User ID to recommend for
    #[arg(long, default_value = "196")]
    user_id: UserId,

    /// Number of recommendations to print
    #[arg(long, default_value = "5")]
    top_n: usize,

    /// Number of cross-validation folds
    #[arg(long, default_value = "5")]
    folds: usize,

    /// Seed for reproducible training and fold splits
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let layout = BuiltinDataset::from_name(&cli.dataset)
        .context("Unrecognized dataset identifier")?;
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("data").join(&cli.dataset));

    // Load ratings and the item catalog (this may take a moment)
    println!("Loading {} dataset...", layout.display_name);
    let start = Instant::now();
    let dataset = Dataset::load_builtin(&cli.dataset, &data_dir)
        .with_context(|| format!("Failed to load dataset from {}", data_dir.display()))?;
    let catalog =
        ItemCatalog::load(&dataset.item_file()).context("Failed to load item catalog")?;
    println!(
        "{} Loaded {} ratings and {} items in {:?}",
        "✓".green(),
        dataset.ratings.len(),
        catalog.len(),
        start.elapsed()
    );

    let mut svd = Svd::default();
    let mut kfold = KFold::new(cli.folds);
    if let Some(seed) = cli.seed {
        svd = svd.with_seed(seed);
        kfold = kfold.with_seed(seed);
    }

    // Score the model with k-fold cross-validation
    println!("Evaluating SVD model...");
    let report = cross_validate(&svd, &dataset.ratings, dataset.rating_scale, &kfold)
        .context("Cross-validation failed")?;
    println!("RMSE: {:.4}", report.mean_rmse());

    // Refit on the full trainset and rank the user's unrated items
    let trainset = Trainset::from_ratings(&dataset.ratings, dataset.rating_scale)
        .context("Failed to build the trainset")?;
    let model = svd.fit(trainset);
    let recommendations = top_n(&model, cli.user_id, cli.top_n)
        .with_context(|| format!("Failed to rank items for user {}", cli.user_id))?;

    print_recommendations(&catalog, cli.user_id, cli.top_n, &recommendations)
}

/// Join ranked item ids back to titles and print one line per item
fn print_recommendations(
    catalog: &ItemCatalog,
    user_id: UserId,
    requested: usize,
    recommendations: &[RankedItem],
) -> Result<()> {
    println!();
    println!("---");
    println!(
        "{}",
        format!("Top {} recommendations for user {}:", requested, user_id)
            .bold()
            .blue()
    );
    for rec in recommendations {
        let title = catalog
            .title(rec.item_id)
            .with_context(|| format!("Recommended item {} has no catalog entry", rec.item_id))?;
        println!("{}", format_recommendation(rec.score, title, rec.item_id));
    }
    Ok(())
}

/// One recommendation line: score to two decimals, then title and id
fn format_recommendation(score: f32, title: &str, item_id: ItemId) -> String {
    format!("{:.2} - {} (ID: {})", score, title, item_id)
}
