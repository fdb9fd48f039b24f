//! Core domain types for the movie dataset.
//!
//! One [`MovieRecord`] corresponds to one data line of the `;`-delimited
//! source file.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Numeric identifier from the first column of the dataset
pub type MovieId = u32;

/// Number of `;`-separated fields on every data line
pub const FIELD_COUNT: usize = 12;

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie row, with list fields already split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Genre tags in source order (e.g. `["Action", "Adventure", "Sci-Fi"]`)
    pub genres: Vec<String>,
    pub description: String,
    pub director: String,
    /// Billed actors in source order
    ///
    /// May be empty if the source field was blank; the ranker rejects such
    /// records when they are selected.
    pub actors: Vec<String>,
    pub year: i32,
    /// Runtime in minutes
    pub runtime: u32,
    /// Critic rating, roughly 0-10
    pub rating: f64,
    pub votes: u64,
    /// Revenue in millions, blank for some titles
    pub revenue: Option<f64>,
    pub metascore: Option<f64>,
}

impl MovieRecord {
    /// Whether this record carries the exact genre tag `genre`
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
