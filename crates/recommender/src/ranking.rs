//! Top-N ranking of unrated items.
//!
//! ## Algorithm
//! 1. Translate the raw user id to its inner id (unknown users are an error)
//! 2. Collect the items the user already rated into a HashSet
//! 3. Estimate a rating for every other item the trainset knows
//! 4. Sort by estimate, highest first; ties keep item enumeration order
//! 5. Keep the first n

use crate::error::Result;
use crate::traits::RatingPredictor;
use crate::trainset::InnerId;
use data_loader::{ItemId, UserId};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// One entry of a top-N recommendation list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedItem {
    pub item_id: ItemId,
    /// Estimated rating this ranking is ordered by
    pub score: f32,
}

/// Rank the `n` best unrated items for a user.
///
/// Only items the user has not rated in the trainset are candidates, so a
/// user who rated everything gets an empty list. When fewer than `n`
/// unrated items exist, all of them are returned without padding.
pub fn top_n(model: &impl RatingPredictor, user_id: UserId, n: usize) -> Result<Vec<RankedItem>> {
    let trainset = model.trainset();
    let inner_uid = trainset.to_inner_uid(user_id)?;

    let rated: HashSet<InnerId> = trainset
        .user_ratings(inner_uid)
        .iter()
        .map(|&(item, _)| item)
        .collect();

    let mut ranked: Vec<RankedItem> = trainset
        .all_items()
        .filter(|inner_iid| !rated.contains(inner_iid))
        .map(|inner_iid| {
            let item_id = trainset.to_raw_iid(inner_iid);
            RankedItem {
                item_id,
                score: model.predict(user_id, item_id).estimate,
            }
        })
        .collect();

    debug!(
        "Scored {} unrated items for user {} ({} already rated)",
        ranked.len(),
        user_id,
        rated.len()
    );

    // Stable sort, so equal scores stay in enumeration order
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(n);

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommenderError;
    use crate::traits::Prediction;
    use crate::trainset::Trainset;
    use data_loader::Rating;
    use std::collections::HashMap;

    /// Predictor with fixed per-item scores, independent of any training
    struct StubModel {
        trainset: Trainset,
        scores: HashMap<ItemId, f32>,
    }

    impl StubModel {
        fn new(ratings: &[Rating], scores: &[(ItemId, f32)]) -> Self {
            Self {
                trainset: Trainset::from_ratings(ratings, (1.0, 5.0)).unwrap(),
                scores: scores.iter().copied().collect(),
            }
        }
    }

    impl RatingPredictor for StubModel {
        fn predict(&self, user_id: UserId, item_id: ItemId) -> Prediction {
            Prediction {
                user_id,
                item_id,
                actual: None,
                estimate: self.scores.get(&item_id).copied().unwrap_or(3.0),
            }
        }

        fn trainset(&self) -> &Trainset {
            &self.trainset
        }
    }

    fn rating(user_id: UserId, item_id: ItemId, value: f32) -> Rating {
        Rating {
            user_id,
            item_id,
            rating: value,
            timestamp: 0,
        }
    }

    /// User 1 rated items 5 and 9; items 10 and 11 exist through user 2
    fn four_item_model() -> StubModel {
        let ratings = vec![
            rating(1, 5, 4.0),
            rating(1, 9, 3.0),
            rating(2, 10, 5.0),
            rating(2, 11, 2.0),
        ];
        StubModel::new(
            &ratings,
            &[(5, 5.0), (9, 5.0), (10, 4.0), (11, 2.0)],
        )
    }

    #[test]
    fn test_rated_items_are_excluded() {
        let model = four_item_model();
        let ranked = top_n(&model, 1, 5).unwrap();

        let ids: Vec<ItemId> = ranked.iter().map(|r| r.item_id).collect();
        // Items 5 and 9 are rated, so only 10 and 11 remain, best first
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_returns_at_most_n() {
        let ratings = vec![
            rating(1, 1, 4.0),
            rating(2, 2, 4.0),
            rating(2, 3, 4.0),
            rating(2, 4, 4.0),
            rating(2, 5, 4.0),
        ];
        let model = StubModel::new(
            &ratings,
            &[(2, 4.0), (3, 5.0), (4, 2.0), (5, 3.0)],
        );

        let ranked = top_n(&model, 1, 2).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].item_id, 3);
        assert_eq!(ranked[1].item_id, 2);
    }

    #[test]
    fn test_short_candidate_lists_are_not_padded() {
        let model = four_item_model();
        let ranked = top_n(&model, 1, 10).unwrap();
        // Only two unrated items exist; no padding to reach 10
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_scores_are_non_increasing() {
        let ratings: Vec<Rating> = (1..=8).map(|item| rating(2, item, 4.0)).collect();
        let mut with_target = ratings.clone();
        with_target.push(rating(1, 1, 5.0));
        let model = StubModel::new(
            &with_target,
            &[
                (2, 2.5),
                (3, 4.8),
                (4, 1.0),
                (5, 3.3),
                (6, 4.8),
                (7, 2.0),
                (8, 5.0),
            ],
        );

        let ranked = top_n(&model, 1, 8).unwrap();
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        // Items 2 and 3 tie; item 2 entered the trainset first
        let ratings = vec![
            rating(1, 1, 5.0),
            rating(2, 2, 4.0),
            rating(2, 3, 4.0),
        ];
        let model = StubModel::new(&ratings, &[(2, 4.5), (3, 4.5)]);

        let ranked = top_n(&model, 1, 2).unwrap();
        assert_eq!(ranked[0].item_id, 2);
        assert_eq!(ranked[1].item_id, 3);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let model = four_item_model();

        let first = top_n(&model, 1, 5).unwrap();
        let second = top_n(&model, 1, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_user_is_an_error() {
        let model = four_item_model();

        let err = top_n(&model, 999, 5).unwrap_err();
        assert!(matches!(err, RecommenderError::UnknownUser { id: 999 }));
    }

    #[test]
    fn test_user_who_rated_everything_gets_nothing() {
        let ratings = vec![rating(1, 1, 4.0), rating(1, 2, 3.0)];
        let model = StubModel::new(&ratings, &[]);

        let ranked = top_n(&model, 1, 5).unwrap();
        assert!(ranked.is_empty());
    }
}
