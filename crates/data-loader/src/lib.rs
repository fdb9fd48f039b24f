//! # Data Loader Crate
//!
//! This crate reads the `;`-delimited movie dataset into typed records.
//!
//! ## Main Components
//!
//! - **types**: [`MovieRecord`] and schema constants
//! - **parser**: strict line parser and the [`load`] entry point
//! - **error**: [`MovieDataError`], shared by every crate in the workspace
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load;
//! use std::path::Path;
//!
//! // Keep movies released in 2014 or later
//! let records = load(Path::new("films.csv"), 2014)?;
//! println!("Loaded {} movies", records.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, MovieDataError, Result};
pub use parser::{load, load_from_reader};
pub use types::{MovieId, MovieRecord, FIELD_COUNT};
