//! Core traits between training, prediction, and ranking.
//!
//! This module defines the two capability seams of the crate: a Trainer
//! turns a trainset into a fitted model, and a RatingPredictor estimates
//! ratings. Ranking and evaluation only ever see these traits, so both
//! can be exercised with stub models in tests.

use crate::trainset::Trainset;
use data_loader::{ItemId, Rating, UserId};

/// A rating estimate for one (user, item) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub user_id: UserId,
    pub item_id: ItemId,
    /// True rating when predicting over a held-out set, `None` otherwise
    pub actual: Option<f32>,
    /// Estimated rating, clipped to the trainset's rating scale
    pub estimate: f32,
}

/// Anything that can fit a model on a trainset.
///
/// ## Design Note
/// - `fit` consumes the trainset; the fitted model owns it afterwards,
///   since every prediction needs the id mapping it holds
pub trait Trainer {
    type Model: RatingPredictor;

    /// Train a model on the given trainset
    fn fit(&self, trainset: Trainset) -> Self::Model;
}

/// A fitted model that can estimate ratings for raw (user, item) pairs.
pub trait RatingPredictor {
    /// Estimate the rating `user_id` would give `item_id`.
    ///
    /// Never fails: ids the trainset doesn't know fall back to baseline
    /// estimates, the same way a cold-start request is served.
    fn predict(&self, user_id: UserId, item_id: ItemId) -> Prediction;

    /// The trainset this model was fitted on
    fn trainset(&self) -> &Trainset;

    /// Estimate a rating for every entry of a held-out test set, keeping
    /// the true rating on each prediction for scoring
    fn test(&self, testset: &[Rating]) -> Vec<Prediction> {
        testset
            .iter()
            .map(|r| {
                let mut prediction = self.predict(r.user_id, r.item_id);
                prediction.actual = Some(r.rating);
                prediction
            })
            .collect()
    }
}
