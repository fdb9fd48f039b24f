//! Service crate for the top-movies tool.
//!
//! This crate contains the orchestrator that runs load, rank and write as
//! one pass, and the writer for the plain-text result file.

pub mod orchestrator;
pub mod writer;

pub use orchestrator::{RunSummary, TopMoviesRequest, TopMoviesService};
pub use writer::{format_entry, write_ranked};
