//! Ranking pipeline for loaded movie records.
//!
//! This crate provides:
//! - Filter trait and the genre filter implementation
//! - ActorPeakRatings, the per-actor best rating table
//! - `rank`, which scores, orders and truncates records
//!
//! ## Architecture
//! A ranking call runs in stages:
//! 1. Actor peaks are computed over every record
//! 2. The genre filter selects records to score
//! 3. Each selected record gets a composite score
//! 4. Scores are sorted and truncated to the configured size
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, GenreFilter, RankConfig};
//!
//! let config = RankConfig::new()
//!     .with_genres(GenreFilter::parse("Action"))
//!     .with_top_n(5);
//!
//! let top = rank(&records, &config)?;
//! ```

pub mod traits;
pub mod filters;
pub mod actor_peaks;
pub mod ranker;

// Re-export main types
pub use traits::Filter;
pub use filters::GenreFilter;
pub use actor_peaks::ActorPeakRatings;
pub use ranker::{rank, RankConfig, RankedEntry};
