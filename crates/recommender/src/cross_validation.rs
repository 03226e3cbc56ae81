//! K-fold cross-validation over a ratings list.
//!
//! The splitter works on rating indices: shuffle once, cut into k folds of
//! near-equal size, and use each fold as the held-out test set exactly
//! once. Folds are evaluated in parallel since they are independent.

use crate::error::{RecommenderError, Result};
use crate::metrics;
use crate::traits::{RatingPredictor, Trainer};
use crate::trainset::Trainset;
use data_loader::Rating;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use tracing::info;

/// Splits rating indices into k folds of near-equal size
#[derive(Debug, Clone, Copy)]
pub struct KFold {
    n_splits: usize,
    seed: Option<u64>,
}

/// One train/test split of rating indices
#[derive(Debug, Clone)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Five folds, unseeded
impl Default for KFold {
    fn default() -> Self {
        Self::new(5)
    }
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            seed: None,
        }
    }

    /// Fix the shuffle seed for reproducible splits
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Produce the k train/test index splits for `n` ratings.
    ///
    /// Every index lands in exactly one test fold, and fold sizes differ
    /// by at most one (the first `n % k` folds take the extra element).
    /// Needs `2 <= k <= n`.
    pub fn split(&self, n: usize) -> Result<Vec<Fold>> {
        if self.n_splits < 2 || self.n_splits > n {
            return Err(RecommenderError::InvalidFoldCount {
                folds: self.n_splits,
                ratings: n,
            });
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        indices.shuffle(&mut rng);

        let base = n / self.n_splits;
        let extra = n % self.n_splits;
        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for fold_no in 0..self.n_splits {
            let stop = start + base + usize::from(fold_no < extra);
            let test = indices[start..stop].to_vec();
            let train = indices[..start]
                .iter()
                .chain(indices[stop..].iter())
                .copied()
                .collect();
            folds.push(Fold { train, test });
            start = stop;
        }

        Ok(folds)
    }
}

/// Per-fold accuracy scores from [`cross_validate`]
#[derive(Debug, Clone)]
pub struct CvReport {
    pub fold_rmse: Vec<f64>,
    pub fold_mae: Vec<f64>,
}

impl CvReport {
    pub fn mean_rmse(&self) -> f64 {
        self.fold_rmse.iter().sum::<f64>() / self.fold_rmse.len() as f64
    }

    pub fn mean_mae(&self) -> f64 {
        self.fold_mae.iter().sum::<f64>() / self.fold_mae.len() as f64
    }
}

/// Evaluate a trainer with k-fold cross-validation.
///
/// For each fold the trainer is fitted on the train split and scored on
/// the held-out split. Folds run in parallel; the report keeps fold order.
pub fn cross_validate<T>(
    trainer: &T,
    ratings: &[Rating],
    rating_scale: (f32, f32),
    kfold: &KFold,
) -> Result<CvReport>
where
    T: Trainer + Sync,
{
    let folds = kfold.split(ratings.len())?;
    let n_folds = folds.len();

    let scores: Vec<(f64, f64)> = folds
        .par_iter()
        .enumerate()
        .map(|(fold_no, fold)| -> Result<(f64, f64)> {
            let train: Vec<Rating> = fold.train.iter().map(|&idx| ratings[idx]).collect();
            let test: Vec<Rating> = fold.test.iter().map(|&idx| ratings[idx]).collect();

            let trainset = Trainset::from_ratings(&train, rating_scale)?;
            let model = trainer.fit(trainset);
            let predictions = model.test(&test);

            let fold_rmse = metrics::rmse(&predictions)?;
            let fold_mae = metrics::mae(&predictions)?;
            info!(
                "Fold {}/{}: RMSE {:.4}, MAE {:.4}",
                fold_no + 1,
                n_folds,
                fold_rmse,
                fold_mae
            );
            Ok((fold_rmse, fold_mae))
        })
        .collect::<Result<Vec<_>>>()?;

    let (fold_rmse, fold_mae): (Vec<f64>, Vec<f64>) = scores.into_iter().unzip();
    Ok(CvReport { fold_rmse, fold_mae })
}
