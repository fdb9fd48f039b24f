//! # Top Movies Orchestrator
//!
//! This module runs the whole job as one sequential pass:
//! 1. Load records above the year floor
//! 2. Rank them with the configured genre filter and limit
//! 3. Write the ranking to the output file
//!
//! A failure at any step returns before the output file is touched. An
//! empty ranking is not written either.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use data_loader::{MovieRecord, Result};
use pipeline::{RankConfig, RankedEntry};

use crate::writer::write_ranked;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "top_movies.txt";

/// What to load and how to rank it
#[derive(Debug, Clone)]
pub struct TopMoviesRequest {
    pub data_path: PathBuf,
    /// 0 keeps every year
    pub year_floor: i32,
    pub rank: RankConfig,
}

impl TopMoviesRequest {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            year_floor: 0,
            rank: RankConfig::new(),
        }
    }

    /// Configure the year floor (default: 0, no floor)
    pub fn with_year_floor(mut self, year_floor: i32) -> Self {
        self.year_floor = year_floor;
        self
    }

    /// Configure genre filter and limit (default: unfiltered, unbounded)
    pub fn with_rank_config(mut self, rank: RankConfig) -> Self {
        self.rank = rank;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Records kept by the loader
    pub loaded: usize,
    pub entries: Vec<RankedEntry>,
    /// Where the ranking was written; `None` when nothing matched
    pub output: Option<PathBuf>,
    pub elapsed: Duration,
}

/// Runs load, rank and write for a request
#[derive(Debug, Clone)]
pub struct TopMoviesService {
    output_path: PathBuf,
}

impl TopMoviesService {
    /// Create a service writing to [`DEFAULT_OUTPUT`]
    pub fn new() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Configure the output file (must end in `.txt`)
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Main entry point: load, rank and write.
    pub fn run(&self, request: &TopMoviesRequest) -> Result<RunSummary> {
        let start_time = Instant::now();

        let records = self.load(request)?;
        info!("Loaded {} records from {}", records.len(), request.data_path.display());

        let entries = pipeline::rank(&records, &request.rank)?;
        info!("Ranked {} movies", entries.len());

        let output = if entries.is_empty() {
            info!("No movies matched, skipping output");
            None
        } else {
            write_ranked(&entries, &self.output_path)?;
            info!("Wrote ranking to {}", self.output_path.display());
            Some(self.output_path.clone())
        };

        let elapsed = start_time.elapsed();
        info!("Total time: {:.2?}", elapsed);

        Ok(RunSummary {
            loaded: records.len(),
            entries,
            output,
            elapsed,
        })
    }

    fn load(&self, request: &TopMoviesRequest) -> Result<Vec<MovieRecord>> {
        data_loader::load(&request.data_path, request.year_floor)
    }
}

impl Default for TopMoviesService {
    fn default() -> Self {
        Self::new()
    }
}
