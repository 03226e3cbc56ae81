//! Item catalog: the id -> metadata table built from u.item.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Item, ItemId};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// In-memory item table keyed by item id.
///
/// Built once from the metadata file, then used read-only to turn ranked
/// item ids back into titles. Lookups are O(1) through the HashMap.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: HashMap<ItemId, Item>,
}

impl ItemCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Load the catalog from a u.item-format file
    pub fn load(path: &Path) -> Result<Self> {
        let items = parser::parse_items(path)?;
        let catalog = Self::from_items(items);
        debug!("Loaded catalog with {} items", catalog.len());
        Ok(catalog)
    }

    /// Build the catalog from already-parsed rows.
    ///
    /// When an id appears on more than one row, the first row wins, so
    /// lookups see the same entry a first-match scan of the file would.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            map.entry(item.id).or_insert(item);
        }
        Self { items: map }
    }

    /// Insert a single item, keeping an existing entry with the same id
    pub fn insert(&mut self, item: Item) {
        self.items.entry(item.id).or_insert(item);
    }

    /// Get the full metadata row for an item
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Title for an item id.
    ///
    /// An absent id is an error: ranked lists are built from ids the
    /// ratings file knows, so a miss means the two files disagree and the
    /// run must not silently print a placeholder.
    pub fn title(&self, id: ItemId) -> Result<&str> {
        self.items
            .get(&id)
            .map(|item| item.title.as_str())
            .ok_or(DataLoadError::UnknownItem { id })
    }

    /// Titles for a list of ids, failing on the first absent id
    pub fn titles(&self, ids: &[ItemId]) -> Result<Vec<&str>> {
        ids.iter().map(|&id| self.title(id)).collect()
    }

    /// Number of distinct items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}
