//! Error types for the recommender crate.

use data_loader::{ItemId, UserId};
use thiserror::Error;

/// Errors from trainset construction, evaluation, and ranking
#[derive(Error, Debug)]
pub enum RecommenderError {
    /// A raw user id that the trainset never saw a rating from
    #[error("User {id} is not part of the trainset")]
    UnknownUser { id: UserId },

    /// A raw item id that the trainset never saw a rating for
    #[error("Item {id} is not part of the trainset")]
    UnknownItem { id: ItemId },

    /// A trainset cannot be built from zero ratings
    #[error("Cannot build a trainset from an empty ratings list")]
    EmptyTrainset,

    /// Accuracy metrics need at least one prediction with a true rating
    #[error("Prediction list has no true ratings to score against")]
    EmptyPredictions,

    /// Fold count outside 2..=n_ratings
    #[error("Cannot split {ratings} ratings into {folds} folds")]
    InvalidFoldCount { folds: usize, ratings: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommenderError>;
