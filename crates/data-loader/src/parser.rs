//! Parsers for the MovieLens 100k data files.
//!
//! This module handles the two files the recommender reads:
//! - u.data: userId <TAB> itemId <TAB> rating <TAB> timestamp
//! - u.item: itemId|title|release date|video release date|IMDb URL|19 genre flags
//!
//! Both files are encoded as ISO-8859-1 (Latin-1), not UTF-8, so they are
//! read byte-by-byte and widened to chars before any string handling.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of fields in a u.data line
const RATING_FIELDS: usize = 4;

/// Number of fields in a u.item line: 5 metadata columns + 19 genre flags
const ITEM_FIELDS: usize = 24;

/// Helper function to read a file with ISO-8859-1 encoding (Latin-1)
///
/// The MovieLens dataset uses ISO-8859-1 encoding, not UTF-8.
/// This function reads the file as bytes and converts each byte to the
/// Unicode code point it maps to.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    // ISO-8859-1 is a single-byte encoding where each byte directly maps
    // to a Unicode code point
    let content: String = bytes.iter().map(|&b| b as char).collect();

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// File name used in error messages, falling back to the full path
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse one field of a line, wrapping the parse failure with its location
fn parse_field<T>(s: &str, field: &str, file: &str, line: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    s.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", field, e),
    })
}

/// Empty columns become `None`; u.item leaves release date and URL blank
/// for a few rows
fn opt_field(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a ratings file (u.data)
///
/// Format: userId <SEP> itemId <SEP> rating <SEP> timestamp
/// where the separator comes from the dataset layout (TAB for ml-100k).
///
/// Lines are parsed in parallel; the output keeps file order, which later
/// becomes the insertion order of the trainset.
pub fn parse_ratings(path: &Path, separator: char) -> Result<Vec<Rating>> {
    let lines = read_lines_latin1(path)?;
    let file = file_label(path);

    lines
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_rating_line(line.trim(), separator, &file, idx + 1))
        .collect()
}

fn parse_rating_line(line: &str, separator: char, file: &str, line_no: usize) -> Result<Rating> {
    let fields: Vec<&str> = line.split(separator).collect();
    if fields.len() != RATING_FIELDS {
        return Err(DataLoadError::FieldCountMismatch {
            file: file.to_string(),
            expected: RATING_FIELDS,
            found: fields.len(),
            line: line_no,
        });
    }

    Ok(Rating {
        user_id: parse_field(fields[0], "userId", file, line_no)?,
        item_id: parse_field(fields[1], "itemId", file, line_no)?,
        rating: parse_field(fields[2], "rating", file, line_no)?,
        timestamp: parse_field(fields[3], "timestamp", file, line_no)?,
    })
}

/// Parse the item metadata file (u.item)
///
/// Format: itemId|title|release date|video release date|IMDb URL|flag...
///
/// Every row must have exactly 24 pipe-separated columns. The 19 trailing
/// columns are 0/1 genre flags in the order of [`GENRE_COLUMNS`].
pub fn parse_items(path: &Path) -> Result<Vec<Item>> {
    let lines = read_lines_latin1(path)?;
    let file = file_label(path);
    let mut items = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }
        items.push(parse_item_line(line_trimmed, &file, line_no)?);
    }

    Ok(items)
}

fn parse_item_line(line: &str, file: &str, line_no: usize) -> Result<Item> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != ITEM_FIELDS {
        return Err(DataLoadError::FieldCountMismatch {
            file: file.to_string(),
            expected: ITEM_FIELDS,
            found: fields.len(),
            line: line_no,
        });
    }

    let title = fields[1].trim();
    if title.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Empty title".to_string(),
        });
    }

    Ok(Item {
        id: parse_field(fields[0], "itemId", file, line_no)?,
        title: title.to_string(),
        year: extract_year_from_title(title),
        release_date: opt_field(fields[2]),
        // fields[3] is the video release date, blank for every ml-100k row
        imdb_url: opt_field(fields[4]),
        genres: parse_genre_flags(&fields[5..], line_no)?,
    })
}

/// Parse the 19 genre flag columns of a u.item row
///
/// Each flag must be "0" or "1"; a set flag adds the matching entry of
/// [`GENRE_COLUMNS`] to the item's genre list.
fn parse_genre_flags(flags: &[&str], line_no: usize) -> Result<Vec<Genre>> {
    let mut genres = Vec::new();
    for (flag, genre) in flags.iter().zip(GENRE_COLUMNS) {
        match flag.trim() {
            "0" => {}
            "1" => genres.push(genre),
            other => {
                return Err(DataLoadError::InvalidValue {
                    field: format!("genre flag {:?} (line {})", genre, line_no),
                    value: other.to_string(),
                });
            }
        }
    }
    Ok(genres)
}

/// Extract year from an item title
///
/// Example: "Toy Story (1995)" -> Some(1995)
///          "unknown" -> None
fn extract_year_from_title(title: &str) -> Option<u16> {
    // Extract year from parentheses at end of title
    let start = title.rfind('(')?;
    let end = title.rfind(')')?;
    if start < end {
        let year_str = &title[start + 1..end];
        if let Ok(year) = year_str.parse::<u16>() {
            return Some(year);
        }
    }
    None
}
