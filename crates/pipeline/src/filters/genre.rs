//! Filter to keep only movies tagged with one of the requested genres.
//!
//! Matching is exact set intersection: "Sci-Fi" never matches "Sci" or "Fi".

use crate::traits::Filter;
use data_loader::MovieRecord;
use std::collections::BTreeSet;

/// Keeps records whose genre tags intersect a requested set.
///
/// An empty set means "no filter": every record passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter {
    genres: BTreeSet<String>,
}

impl GenreFilter {
    /// A filter that keeps every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from explicit genre tags.
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated list such as `"Action,Adventure"`.
    ///
    /// Tags are trimmed; blank tags are ignored, so `""` yields the
    /// unfiltered [`GenreFilter::all`].
    pub fn parse(s: &str) -> Self {
        Self::new(
            s.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Whether a single record passes this filter
    pub fn matches(&self, record: &MovieRecord) -> bool {
        self.is_empty() || self.genres.iter().any(|genre| record.has_genre(genre))
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        if self.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
