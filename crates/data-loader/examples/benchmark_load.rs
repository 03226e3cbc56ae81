use data_loader::{Dataset, ItemCatalog, ML_100K};
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/ml-100k");

    println!("Loading MovieLens 100k dataset...\n");

    let start = Instant::now();
    let dataset = Dataset::load_builtin(ML_100K, data_dir)
        .expect("Failed to load dataset");
    let catalog = ItemCatalog::load(&dataset.item_file())
        .expect("Failed to load item catalog");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Ratings: {}", dataset.ratings.len());
    println!("Items: {}", catalog.len());
    println!("\nPerformance: {:.0} ratings/second",
             dataset.ratings.len() as f64 / elapsed.as_secs_f64());
}
