//! # Recommender Crate
//!
//! Matrix-factorization rating prediction with k-fold evaluation and
//! top-N ranking.
//!
//! ## Main Components
//!
//! - **trainset**: Ratings reindexed onto dense inner ids
//! - **svd**: Biased SVD trained by stochastic gradient descent
//! - **traits**: Trainer / RatingPredictor seams between the stages
//! - **cross_validation**: K-fold splitting and parallel evaluation
//! - **metrics**: RMSE and MAE over prediction lists
//! - **ranking**: Top-N ranking of a user's unrated items
//! - **error**: Error types for this crate
//!
//! ## Learning Goals
//!
//! This crate teaches:
//!
//! 1. **Algorithm Implementation**: Translating SGD matrix factorization into Rust
//! 2. **Traits as Seams**: Trainer and RatingPredictor keep ranking testable with stubs
//! 3. **HashSet Usage**: O(1) lookups for filtering already-rated items
//! 4. **Builder Pattern**: Configurable training with method chaining
//! 5. **Instrumentation**: Using tracing for observability
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{cross_validate, top_n, KFold, Svd, Trainer, Trainset};
//!
//! // Evaluate with 5-fold cross-validation
//! let svd = Svd::default();
//! let report = cross_validate(&svd, &ratings, (1.0, 5.0), &KFold::new(5))?;
//! println!("RMSE: {:.4}", report.mean_rmse());
//!
//! // Fit on everything and rank unseen items for one user
//! let model = svd.fit(Trainset::from_ratings(&ratings, (1.0, 5.0))?);
//! let recommendations = top_n(&model, 196, 5)?;
//! ```

// Public modules
pub mod cross_validation;
pub mod error;
pub mod metrics;
pub mod ranking;
pub mod svd;
pub mod traits;
pub mod trainset;

// Re-export commonly used types for convenience
pub use cross_validation::{CvReport, Fold, KFold, cross_validate};
pub use error::{RecommenderError, Result};
pub use metrics::{mae, rmse};
pub use ranking::{RankedItem, top_n};
pub use svd::{Svd, SvdConfig, SvdModel};
pub use traits::{Prediction, RatingPredictor, Trainer};
pub use trainset::{InnerId, Trainset};
