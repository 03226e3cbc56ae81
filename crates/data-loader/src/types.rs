//! Core domain types for the MovieLens 100k dataset.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (UserId, ItemId)
//! - Enums for fixed sets of values
//! - Derive macros for common traits

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with item IDs

/// Unique identifier for a user (1-943 in MovieLens 100k)
pub type UserId = u32;

/// Unique identifier for an item (1-1682 in MovieLens 100k)
pub type ItemId = u32;

// =============================================================================
// Rating Type
// =============================================================================

/// A single rating of an item by a user, as read from `u.data`
///
/// Rust concepts:
/// - Small, copyable struct (all fields are Copy)
/// - `pub` makes fields accessible outside this module
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub item_id: ItemId,
    /// Rating value from 1.0 to 5.0
    pub rating: f32,
    /// Unix timestamp when the rating was made
    pub timestamp: i64,
}

// =============================================================================
// Item-related Types
// =============================================================================

/// One row of the item metadata table (`u.item`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Year extracted from the title (e.g., "Toy Story (1995)")
    ///
    /// Rust concept: `Option<T>` represents a value that may or may not exist
    /// - `Some(1995)` means a year was found in the title
    /// - `None` means the title carries no year
    pub year: Option<u16>,
    /// Release date column as written in the file (e.g., "01-Jan-1995")
    pub release_date: Option<String>,
    /// IMDb URL column; empty for a handful of rows
    pub imdb_url: Option<String>,
    /// Genres whose flag column is set for this row
    pub genres: Vec<Genre>,
}

/// Item genres from MovieLens 100k
///
/// These are the 19 genre flag columns of `u.item`. "unknown" is a real
/// column in the file, used for rows with no genre information.
///
/// Rust concept: Enums can represent discrete categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Unknown,
    Action,
    Adventure,
    Animation,
    Children,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

/// The genre flag columns of `u.item`, in file order.
///
/// Column 5 of a row holds the flag for `GENRE_COLUMNS[0]`, column 6 for
/// `GENRE_COLUMNS[1]`, and so on.
pub const GENRE_COLUMNS: [Genre; 19] = [
    Genre::Unknown,
    Genre::Action,
    Genre::Adventure,
    Genre::Animation,
    Genre::Children,
    Genre::Comedy,
    Genre::Crime,
    Genre::Documentary,
    Genre::Drama,
    Genre::Fantasy,
    Genre::FilmNoir,
    Genre::Horror,
    Genre::Musical,
    Genre::Mystery,
    Genre::Romance,
    Genre::SciFi,
    Genre::Thriller,
    Genre::War,
    Genre::Western,
];
