//! Biased matrix factorization trained with stochastic gradient descent.
//!
//! Each user u and item i get a bias term and a latent factor vector, and
//! a rating is estimated as
//!
//!   r_hat = mu + b_u + b_i + q_i . p_u
//!
//! where mu is the global mean of the trainset. Training minimizes the
//! regularized squared error of the known ratings by SGD, one pass over
//! the ratings per epoch, in trainset insertion order.

use crate::traits::{Prediction, RatingPredictor, Trainer};
use crate::trainset::{InnerId, Trainset};
use data_loader::{ItemId, UserId};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use tracing::{debug, instrument};

/// Hyperparameters for [`Svd`].
///
/// The defaults are the conventional ones for this model family: 100
/// factors, 20 epochs, learning rate 0.005, regularization 0.02, and
/// factors initialized from a normal with standard deviation 0.1.
#[derive(Debug, Clone, Copy)]
pub struct SvdConfig {
    pub n_factors: usize,
    pub n_epochs: usize,
    pub learning_rate: f32,
    pub regularization: f32,
    /// Standard deviation of the normal the factors are initialized from
    pub init_std_dev: f32,
    /// Seed for factor initialization; drawn from the OS when `None`
    pub seed: Option<u64>,
}

impl Default for SvdConfig {
    fn default() -> Self {
        Self {
            n_factors: 100,
            n_epochs: 20,
            learning_rate: 0.005,
            regularization: 0.02,
            init_std_dev: 0.1,
            seed: None,
        }
    }
}

/// SVD trainer; [`Trainer::fit`] produces an [`SvdModel`].
#[derive(Debug, Clone, Default)]
pub struct Svd {
    config: SvdConfig,
}

impl Svd {
    pub fn new(config: SvdConfig) -> Self {
        Self { config }
    }

    /// Set the number of latent factors
    pub fn with_n_factors(mut self, n_factors: usize) -> Self {
        self.config.n_factors = n_factors;
        self
    }

    /// Set the number of SGD passes over the ratings
    pub fn with_n_epochs(mut self, n_epochs: usize) -> Self {
        self.config.n_epochs = n_epochs;
        self
    }

    /// Set the SGD learning rate
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Set the L2 regularization strength
    pub fn with_regularization(mut self, regularization: f32) -> Self {
        self.config.regularization = regularization;
        self
    }

    /// Fix the initialization seed for reproducible training
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &SvdConfig {
        &self.config
    }

    #[instrument(skip(self, trainset), fields(
        n_ratings = trainset.n_ratings(),
        n_factors = self.config.n_factors,
        n_epochs = self.config.n_epochs,
    ))]
    fn sgd(&self, trainset: Trainset) -> SvdModel {
        let cfg = self.config;
        let n_users = trainset.n_users();
        let n_items = trainset.n_items();
        let lr = cfg.learning_rate;
        let reg = cfg.regularization;
        let mean = trainset.global_mean();

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut user_factors = Array2::from_shape_fn((n_users, cfg.n_factors), |_| {
            let z: f32 = StandardNormal.sample(&mut rng);
            z * cfg.init_std_dev
        });
        let mut item_factors = Array2::from_shape_fn((n_items, cfg.n_factors), |_| {
            let z: f32 = StandardNormal.sample(&mut rng);
            z * cfg.init_std_dev
        });
        let mut user_biases = Array1::<f32>::zeros(n_users);
        let mut item_biases = Array1::<f32>::zeros(n_items);

        for epoch in 0..cfg.n_epochs {
            let mut squared_error = 0.0f64;
            for (u, i, rating) in trainset.all_ratings() {
                let dot = user_factors.row(u).dot(&item_factors.row(i));
                let err = rating - (mean + user_biases[u] + item_biases[i] + dot);
                squared_error += (err as f64) * (err as f64);

                user_biases[u] += lr * (err - reg * user_biases[u]);
                item_biases[i] += lr * (err - reg * item_biases[i]);

                // Factor updates read the pre-update value of the other side
                for f in 0..cfg.n_factors {
                    let puf = user_factors[[u, f]];
                    let qif = item_factors[[i, f]];
                    user_factors[[u, f]] += lr * (err * qif - reg * puf);
                    item_factors[[i, f]] += lr * (err * puf - reg * qif);
                }
            }
            debug!(
                "Epoch {}/{}: train RMSE {:.4}",
                epoch + 1,
                cfg.n_epochs,
                (squared_error / trainset.n_ratings() as f64).sqrt()
            );
        }

        SvdModel {
            trainset,
            user_factors,
            item_factors,
            user_biases,
            item_biases,
            global_mean: mean,
        }
    }
}

impl Trainer for Svd {
    type Model = SvdModel;

    fn fit(&self, trainset: Trainset) -> SvdModel {
        self.sgd(trainset)
    }
}

/// A fitted factorization. Owns the trainset it was fitted on, which
/// carries the id mapping every prediction goes through.
#[derive(Debug, Clone)]
pub struct SvdModel {
    trainset: Trainset,
    user_factors: Array2<f32>,
    item_factors: Array2<f32>,
    user_biases: Array1<f32>,
    item_biases: Array1<f32>,
    global_mean: f32,
}

impl SvdModel {
    /// Raw estimate before clipping.
    ///
    /// Terms the trainset has no data for are left out, so an unknown user
    /// or item degrades to a baseline estimate instead of failing.
    fn estimate(&self, user: Option<InnerId>, item: Option<InnerId>) -> f32 {
        let mut estimate = self.global_mean;
        if let Some(u) = user {
            estimate += self.user_biases[u];
        }
        if let Some(i) = item {
            estimate += self.item_biases[i];
        }
        if let (Some(u), Some(i)) = (user, item) {
            estimate += self.user_factors.row(u).dot(&self.item_factors.row(i));
        }
        estimate
    }
}

impl RatingPredictor for SvdModel {
    fn predict(&self, user_id: UserId, item_id: ItemId) -> Prediction {
        let user = self.trainset.to_inner_uid(user_id).ok();
        let item = self.trainset.to_inner_iid(item_id).ok();
        let (low, high) = self.trainset.rating_scale();
        let estimate = self.estimate(user, item).max(low).min(high);

        Prediction {
            user_id,
            item_id,
            actual: None,
            estimate,
        }
    }

    fn trainset(&self) -> &Trainset {
        &self.trainset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Rating;

    fn rating(user_id: UserId, item_id: ItemId, value: f32) -> Rating {
        Rating {
            user_id,
            item_id,
            rating: value,
            timestamp: 0,
        }
    }

    /// 12 users rating 10 items: items 1-5 always get 5.0, items 6-10
    /// always get 1.0. Global mean 3.0, baseline RMSE 2.0.
    fn polarized_ratings() -> Vec<Rating> {
        let mut ratings = Vec::new();
        for user in 1..=12 {
            for item in 1..=10 {
                let value = if item <= 5 { 5.0 } else { 1.0 };
                ratings.push(rating(user, item, value));
            }
        }
        ratings
    }

    fn fit_with<T: Trainer>(trainer: &T, ratings: &[Rating]) -> T::Model {
        let trainset = Trainset::from_ratings(ratings, (1.0, 5.0)).unwrap();
        trainer.fit(trainset)
    }

    #[test]
    fn test_builder_writes_through_to_config() {
        let svd = Svd::default()
            .with_n_factors(32)
            .with_n_epochs(10)
            .with_learning_rate(0.01)
            .with_regularization(0.05)
            .with_seed(9);

        let config = svd.config();
        assert_eq!(config.n_factors, 32);
        assert_eq!(config.n_epochs, 10);
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.regularization, 0.05);
        assert_eq!(config.seed, Some(9));
        // Untouched fields keep their defaults
        assert_eq!(config.init_std_dev, 0.1);
    }

    #[test]
    fn test_seeded_training_is_deterministic() {
        let ratings = polarized_ratings();
        let svd = Svd::default().with_n_factors(10).with_n_epochs(5).with_seed(42);

        let first = fit_with(&svd, &ratings);
        let second = fit_with(&svd, &ratings);

        for item in 1..=10 {
            assert_eq!(
                first.predict(1, item).estimate,
                second.predict(1, item).estimate
            );
        }
    }

    #[test]
    fn test_training_learns_polarized_items() {
        let ratings = polarized_ratings();
        let svd = Svd::default().with_n_factors(10).with_n_epochs(50).with_seed(7);
        let model = fit_with(&svd, &ratings);

        let predictions = model.test(&ratings);
        let mut squared = 0.0f64;
        for p in &predictions {
            let err = (p.actual.unwrap() - p.estimate) as f64;
            squared += err * err;
        }
        let rmse = (squared / predictions.len() as f64).sqrt();

        // Predicting the global mean everywhere would score 2.0
        assert!(rmse < 1.0, "expected in-sample RMSE below 1.0, got {rmse}");
    }

    #[test]
    fn test_unknown_pair_falls_back_to_global_mean() {
        let ratings = vec![rating(1, 1, 3.0), rating(2, 2, 3.0)];
        let svd = Svd::default().with_n_epochs(5).with_seed(1);
        let model = fit_with(&svd, &ratings);

        let p = model.predict(999, 999);
        assert_eq!(p.estimate, 3.0);
        assert_eq!(p.actual, None);
    }

    #[test]
    fn test_known_user_bias_applies_without_item() {
        // User 1 loves everything, user 2 hates everything
        let mut ratings = Vec::new();
        for item in 1..=8 {
            ratings.push(rating(1, item, 5.0));
            ratings.push(rating(2, item, 1.0));
        }
        let svd = Svd::default().with_n_factors(10).with_n_epochs(20).with_seed(3);
        let model = fit_with(&svd, &ratings);

        // Unknown item: estimate is mean + user bias
        assert!(model.predict(1, 999).estimate > 3.0);
        assert!(model.predict(2, 999).estimate < 3.0);
    }

    #[test]
    fn test_estimates_stay_inside_rating_scale() {
        let ratings: Vec<Rating> = (1..=6).map(|item| rating(1, item, 5.0)).collect();
        let svd = Svd::default().with_n_epochs(40).with_seed(11);
        let model = fit_with(&svd, &ratings);

        // Every rating is 5.0, so raw estimates drift above the scale and
        // must come back clipped
        for item in 1..=6 {
            let estimate = model.predict(1, item).estimate;
            assert!((1.0..=5.0).contains(&estimate));
        }
        assert_eq!(model.predict(999, 999).estimate, 5.0);
    }

    #[test]
    fn test_test_attaches_actuals() {
        let ratings = vec![rating(1, 1, 4.0), rating(2, 1, 2.0)];
        let svd = Svd::default().with_n_epochs(2).with_seed(5);
        let model = fit_with(&svd, &ratings);

        let predictions = model.test(&ratings);
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].actual, Some(4.0));
        assert_eq!(predictions[1].actual, Some(2.0));
    }
}
