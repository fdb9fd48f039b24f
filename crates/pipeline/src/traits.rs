//! Core traits for the ranking pipeline.
//!
//! This module defines the Filter trait that selects which records are
//! scored and ranked.

use data_loader::MovieRecord;

/// Core trait for selecting records before scoring.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with the rayon scoring pass
/// - Filters take ownership of the Vec of borrowed records and return the
///   kept ones in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership of the Vec)
    ///
    /// # Returns
    /// The records that pass, in input order
    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord>;
}
