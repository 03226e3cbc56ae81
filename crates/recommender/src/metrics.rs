//! Accuracy metrics over prediction lists.
//!
//! Both metrics score predictions against their attached true ratings.
//! Predictions without a true rating are skipped; a list with none at all
//! is an error, since a silent 0.0 would read as a perfect score.

use crate::error::{RecommenderError, Result};
use crate::traits::Prediction;

/// Root mean squared error of the predictions that carry a true rating
pub fn rmse(predictions: &[Prediction]) -> Result<f64> {
    let mut squared_sum = 0.0f64;
    let mut count = 0usize;
    for p in predictions {
        if let Some(actual) = p.actual {
            let err = (actual - p.estimate) as f64;
            squared_sum += err * err;
            count += 1;
        }
    }
    if count == 0 {
        return Err(RecommenderError::EmptyPredictions);
    }
    Ok((squared_sum / count as f64).sqrt())
}

/// Mean absolute error of the predictions that carry a true rating
pub fn mae(predictions: &[Prediction]) -> Result<f64> {
    let mut abs_sum = 0.0f64;
    let mut count = 0usize;
    for p in predictions {
        if let Some(actual) = p.actual {
            abs_sum += ((actual - p.estimate) as f64).abs();
            count += 1;
        }
    }
    if count == 0 {
        return Err(RecommenderError::EmptyPredictions);
    }
    Ok(abs_sum / count as f64)
}
