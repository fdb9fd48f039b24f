//! Filter implementations for the ranking pipeline.

pub mod genre;

// Re-export for convenience
pub use genre::GenreFilter;
