//! The trainset: ratings reindexed onto dense ids.
//!
//! Factor matrices are indexed by position, so raw dataset ids (sparse,
//! 1-based) are mapped to dense inner ids (0-based, assigned in first-seen
//! order). The trainset owns both directions of that mapping along with
//! the rating tables the trainer and ranker read.

use crate::error::{RecommenderError, Result};
use data_loader::{ItemId, Rating, UserId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ops::Range;

/// Dense index of a user or item inside a trainset
pub type InnerId = usize;

/// The ratings a model is fitted on, with raw <-> inner id translation.
#[derive(Debug, Clone)]
pub struct Trainset {
    uid_index: HashMap<UserId, InnerId>,
    iid_index: HashMap<ItemId, InnerId>,
    raw_uids: Vec<UserId>,
    raw_iids: Vec<ItemId>,
    /// Per-user rating lists: `ur[u]` holds `(inner item id, rating)`
    ur: Vec<Vec<(InnerId, f32)>>,
    /// All ratings as `(inner uid, inner iid, rating)`, in input order
    ratings: Vec<(InnerId, InnerId, f32)>,
    rating_scale: (f32, f32),
    global_mean: f32,
}

/// Assign the next dense id to `key` if it hasn't been seen yet
///
/// Rust concept: the `entry()` API does one lookup for both the hit and
/// the miss path, instead of a `contains_key` check followed by `insert`
fn intern<K>(index: &mut HashMap<K, InnerId>, reverse: &mut Vec<K>, key: K) -> InnerId
where
    K: Copy + Eq + std::hash::Hash,
{
    match index.entry(key) {
        Entry::Occupied(entry) => *entry.get(),
        Entry::Vacant(entry) => {
            let inner = reverse.len();
            reverse.push(key);
            *entry.insert(inner)
        }
    }
}

impl Trainset {
    /// Build a trainset from raw ratings.
    ///
    /// Inner ids are assigned in order of first appearance, so the same
    /// ratings list always produces the same mapping. Fails on an empty
    /// list because a model cannot be fitted on nothing.
    pub fn from_ratings(ratings: &[Rating], rating_scale: (f32, f32)) -> Result<Self> {
        if ratings.is_empty() {
            return Err(RecommenderError::EmptyTrainset);
        }

        let mut uid_index = HashMap::new();
        let mut iid_index = HashMap::new();
        let mut raw_uids = Vec::new();
        let mut raw_iids = Vec::new();
        let mut ur: Vec<Vec<(InnerId, f32)>> = Vec::new();
        let mut triples = Vec::with_capacity(ratings.len());
        let mut sum = 0.0f64;

        for rating in ratings {
            let u = intern(&mut uid_index, &mut raw_uids, rating.user_id);
            let i = intern(&mut iid_index, &mut raw_iids, rating.item_id);
            if u == ur.len() {
                ur.push(Vec::new());
            }
            ur[u].push((i, rating.rating));
            triples.push((u, i, rating.rating));
            sum += rating.rating as f64;
        }

        let global_mean = (sum / ratings.len() as f64) as f32;

        Ok(Self {
            uid_index,
            iid_index,
            raw_uids,
            raw_iids,
            ur,
            ratings: triples,
            rating_scale,
            global_mean,
        })
    }

    pub fn n_users(&self) -> usize {
        self.raw_uids.len()
    }

    pub fn n_items(&self) -> usize {
        self.raw_iids.len()
    }

    pub fn n_ratings(&self) -> usize {
        self.ratings.len()
    }

    /// Inclusive rating bounds the estimates are clipped to
    pub fn rating_scale(&self) -> (f32, f32) {
        self.rating_scale
    }

    /// Mean of all ratings in the trainset
    pub fn global_mean(&self) -> f32 {
        self.global_mean
    }

    pub fn knows_user(&self, user_id: UserId) -> bool {
        self.uid_index.contains_key(&user_id)
    }

    pub fn knows_item(&self, item_id: ItemId) -> bool {
        self.iid_index.contains_key(&item_id)
    }

    /// Inner id of a raw user id; unknown users are an error
    pub fn to_inner_uid(&self, user_id: UserId) -> Result<InnerId> {
        self.uid_index
            .get(&user_id)
            .copied()
            .ok_or(RecommenderError::UnknownUser { id: user_id })
    }

    /// Inner id of a raw item id; unknown items are an error
    pub fn to_inner_iid(&self, item_id: ItemId) -> Result<InnerId> {
        self.iid_index
            .get(&item_id)
            .copied()
            .ok_or(RecommenderError::UnknownItem { id: item_id })
    }

    /// Raw user id for an inner id produced by this trainset
    pub fn to_raw_uid(&self, inner: InnerId) -> UserId {
        self.raw_uids[inner]
    }

    /// Raw item id for an inner id produced by this trainset
    pub fn to_raw_iid(&self, inner: InnerId) -> ItemId {
        self.raw_iids[inner]
    }

    /// All inner item ids, 0..n_items
    pub fn all_items(&self) -> Range<InnerId> {
        0..self.n_items()
    }

    /// All inner user ids, 0..n_users
    pub fn all_users(&self) -> Range<InnerId> {
        0..self.n_users()
    }

    /// All ratings as `(inner uid, inner iid, rating)`, in input order
    pub fn all_ratings(&self) -> impl Iterator<Item = (InnerId, InnerId, f32)> + '_ {
        self.ratings.iter().copied()
    }

    /// Ratings of one user as `(inner item id, rating)` pairs
    pub fn user_ratings(&self, inner_uid: InnerId) -> &[(InnerId, f32)] {
        &self.ur[inner_uid]
    }
}
