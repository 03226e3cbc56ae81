//! # Data Loader Crate
//!
//! This crate handles locating and parsing the MovieLens 100k dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Rating, Item, Genre)
//! - **parser**: Parse the Latin-1 data files into Rust structs
//! - **catalog**: Item id -> title table with O(1) lookups
//! - **dataset**: Builtin dataset registry and ratings loading
//! - **error**: Error types for data loading
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Error Handling**: Result<T> with a custom thiserror enum
//! 2. **Type Safety**: Type aliases (UserId, ItemId) prevent mixing up IDs
//! 3. **Collections**: HashMap for O(1) id-to-item lookups
//! 4. **Parallelism**: rayon for data-parallel line parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Dataset, ItemCatalog};
//! use std::path::Path;
//!
//! // Resolve the dataset by identifier and load its ratings
//! let dataset = Dataset::load_builtin("ml-100k", Path::new("data/ml-100k"))?;
//!
//! // Load the item catalog from the dataset's metadata file
//! let catalog = ItemCatalog::load(&dataset.item_file())?;
//!
//! println!(
//!     "{} ratings over {} items",
//!     dataset.ratings.len(),
//!     catalog.len()
//! );
//! ```

// Public modules
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::ItemCatalog;
pub use dataset::{BuiltinDataset, Dataset, ML_100K};
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    ItemId,
    // Core types
    Rating,
    Item,
    // Enums
    Genre,
};
