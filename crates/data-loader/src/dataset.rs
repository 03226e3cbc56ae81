//! Builtin dataset registry and ratings loading.
//!
//! Datasets are addressed by identifier ("ml-100k"), which resolves to a
//! known on-disk file layout. The files themselves must already be under
//! the data directory; a missing file fails the load with the expected
//! path in the error.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Rating;
use std::path::{Path, PathBuf};
use tracing::info;

/// Identifier of the MovieLens 100k dataset
pub const ML_100K: &str = "ml-100k";

/// On-disk layout of a known ratings benchmark dataset
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDataset {
    pub name: &'static str,
    /// Human-readable name for banners and logs
    pub display_name: &'static str,
    /// File holding one rating per line
    pub ratings_file: &'static str,
    /// Field separator of the ratings file
    pub ratings_separator: char,
    /// File holding the item metadata table
    pub item_file: &'static str,
    /// Inclusive rating bounds
    pub rating_scale: (f32, f32),
}

const BUILTIN_DATASETS: [BuiltinDataset; 1] = [BuiltinDataset {
    name: ML_100K,
    display_name: "MovieLens 100k",
    ratings_file: "u.data",
    ratings_separator: '\t',
    item_file: "u.item",
    rating_scale: (1.0, 5.0),
}];

impl BuiltinDataset {
    /// Look up a dataset layout by identifier
    pub fn from_name(name: &str) -> Result<Self> {
        BUILTIN_DATASETS
            .iter()
            .copied()
            .find(|dataset| dataset.name == name)
            .ok_or_else(|| DataLoadError::UnknownDataset {
                name: name.to_string(),
            })
    }
}

/// A loaded ratings dataset plus the location of its metadata files
#[derive(Debug)]
pub struct Dataset {
    /// All ratings in file order
    pub ratings: Vec<Rating>,
    /// Inclusive rating bounds of this dataset
    pub rating_scale: (f32, f32),
    dir: PathBuf,
    layout: BuiltinDataset,
}

impl Dataset {
    /// Load a builtin dataset by identifier from `data_dir`.
    ///
    /// Both the ratings file and the item file must exist before anything
    /// is read, so a half-present dataset fails up front.
    pub fn load_builtin(name: &str, data_dir: &Path) -> Result<Self> {
        let layout = BuiltinDataset::from_name(name)?;

        let ratings_path = data_dir.join(layout.ratings_file);
        let item_path = data_dir.join(layout.item_file);
        for path in [&ratings_path, &item_path] {
            if !path.exists() {
                return Err(DataLoadError::MissingFile { path: path.clone() });
            }
        }

        let ratings = parser::parse_ratings(&ratings_path, layout.ratings_separator)?;
        info!("Loaded {} ratings from {}", ratings.len(), ratings_path.display());

        Ok(Self {
            ratings,
            rating_scale: layout.rating_scale,
            dir: data_dir.to_path_buf(),
            layout,
        })
    }

    /// Path to the item metadata file of this dataset
    pub fn item_file(&self) -> PathBuf {
        self.dir.join(self.layout.item_file)
    }
}
