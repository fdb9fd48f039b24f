//! Composite scoring and top-N ranking.
//!
//! ## Algorithm
//! 1. Build the actor peak table over every input record
//! 2. Keep records that pass the genre filter
//! 3. score = (critic rating + mean actor peak) / 2
//! 4. Sort by score descending, then title ascending
//! 5. Truncate to `top_n` (0 keeps everything)

use crate::actor_peaks::ActorPeakRatings;
use crate::filters::GenreFilter;
use crate::traits::Filter;
use data_loader::{MovieDataError, MovieRecord, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// One line of the final ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub title: String,
    /// Composite score, unrounded
    pub score: f64,
}

impl RankedEntry {
    pub fn new(title: impl Into<String>, score: f64) -> Self {
        Self {
            title: title.into(),
            score,
        }
    }
}

/// Ranking parameters.
///
/// - `genres`: an empty filter keeps every genre
/// - `top_n`: 0 returns every matching record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankConfig {
    pub genres: GenreFilter,
    pub top_n: usize,
}

impl RankConfig {
    /// Unfiltered, unbounded configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from user-facing values: a comma-separated genre list and a
    /// signed count. A negative count is rejected.
    pub fn from_raw(genres: &str, top_n: i64) -> Result<Self> {
        let top_n = usize::try_from(top_n).map_err(|_| {
            MovieDataError::InvalidInput(format!("number of movies must be >= 0, got {}", top_n))
        })?;
        Ok(Self::new()
            .with_genres(GenreFilter::parse(genres))
            .with_top_n(top_n))
    }

    /// Configure the genre filter (default: all genres)
    pub fn with_genres(mut self, genres: GenreFilter) -> Self {
        self.genres = genres;
        self
    }

    /// Configure the result limit (default: 0, unbounded)
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// The limit as an `Option`, with the 0 sentinel mapped to `None`
    pub fn limit(&self) -> Option<usize> {
        (self.top_n > 0).then_some(self.top_n)
    }
}

/// Rank `records` by composite score.
///
/// Fails with `EmptyActorList` if any genre-matching record lists no
/// actors; nothing is returned in that case. An empty input yields an
/// empty ranking.
#[instrument(skip_all, fields(records = records.len(), top_n = config.top_n))]
pub fn rank(records: &[MovieRecord], config: &RankConfig) -> Result<Vec<RankedEntry>> {
    // Step 1: actor peaks over the whole set, genre filter not applied yet
    let peaks = ActorPeakRatings::build(records);
    debug!("Built actor peak table with {} actors", peaks.len());

    // Step 2: genre filter
    let selected = config.genres.apply(records.iter().collect());
    debug!(
        "{} kept {} of {} records",
        config.genres.name(),
        selected.len(),
        records.len()
    );

    // Step 3: score in parallel; the first failure in input order wins
    let scored: Vec<Result<RankedEntry>> = selected
        .par_iter()
        .map(|record| score_record(record, &peaks))
        .collect();
    let mut entries = scored.into_iter().collect::<Result<Vec<_>>>()?;

    // Step 4: order and truncate
    entries.sort_by(compare_entries);
    if let Some(limit) = config.limit() {
        entries.truncate(limit);
    }

    debug!("Ranked {} movies", entries.len());
    Ok(entries)
}

fn score_record(record: &MovieRecord, peaks: &ActorPeakRatings<'_>) -> Result<RankedEntry> {
    let actor_rating = peaks.actor_rating(record)?;
    Ok(RankedEntry::new(
        record.title.clone(),
        (record.rating + actor_rating) / 2.0,
    ))
}

/// Score descending, then title ascending.
///
/// `total_cmp` keeps the order total; `sort_by` is stable, so exact
/// duplicates stay in input order.
fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::ErrorKind;

    fn movie(id: u32, title: &str, genres: &[&str], actors: &[&str], rating: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            description: String::new(),
            director: String::new(),
            actors: actors.iter().map(|a| a.to_string()).collect(),
            year: 2015,
            runtime: 100,
            rating,
            votes: 1,
            revenue: None,
            metascore: None,
        }
    }

    #[test]
    fn test_rank_config_from_raw() {
        let config = RankConfig::from_raw("Action,Adventure", 5).unwrap();
        assert_eq!(config.genres, GenreFilter::new(["Action", "Adventure"]));
        assert_eq!(config.limit(), Some(5));

        let unbounded = RankConfig::from_raw("", 0).unwrap();
        assert!(unbounded.genres.is_empty());
        assert_eq!(unbounded.limit(), None);

        let err = RankConfig::from_raw("", -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_composite_score() {
        let records = vec![
            movie(1, "Prestige", &["Drama"], &["Christian Bale", "Hugh Jackman"], 8.5),
            movie(2, "Dark Knight", &["Action"], &["Christian Bale"], 9.0),
        ];

        let ranked = rank(&records, &RankConfig::new()).unwrap();

        // Prestige: actors (9.0 + 8.5) / 2 = 8.75, score (8.5 + 8.75) / 2
        assert_eq!(ranked[0], RankedEntry::new("Dark Knight", 9.0));
        assert_eq!(ranked[1], RankedEntry::new("Prestige", 8.625));
    }

    #[test]
    fn test_sort_by_score_then_title() {
        let records = vec![
            movie(1, "No Country for Old Men", &["Crime"], &["Javier Bardem"], 8.1),
            movie(2, "Dangal", &["Action"], &["Aamir Khan"], 8.8),
            movie(3, "Blood Diamond", &["Thriller"], &["Djimon Hounsou"], 8.1),
        ];

        let ranked = rank(&records, &RankConfig::new()).unwrap();
        let titles: Vec<&str> = ranked.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Dangal", "Blood Diamond", "No Country for Old Men"]);
        assert_eq!(ranked[1].score, ranked[2].score);
    }

    #[test]
    fn test_top_n_truncates() {
        let records: Vec<MovieRecord> = (0..10)
            .map(|i| {
                let actor = format!("Actor {i}");
                movie(i, &format!("Movie {i:02}"), &["Drama"], &[actor.as_str()], 5.0 + i as f64 / 10.0)
            })
            .collect();

        let top3 = rank(&records, &RankConfig::new().with_top_n(3)).unwrap();
        assert_eq!(top3.len(), 3);
        assert_eq!(top3[0].title, "Movie 09");

        let all = rank(&records, &RankConfig::new()).unwrap();
        assert_eq!(all.len(), 10);

        let over = rank(&records, &RankConfig::new().with_top_n(50)).unwrap();
        assert_eq!(over.len(), 10);
    }

    #[test]
    fn test_empty_records() {
        let ranked = rank(&[], &RankConfig::new()).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_actor_list_fails_when_selected() {
        let records = vec![
            movie(1, "Cast", &["Drama"], &["Someone"], 7.0),
            movie(2, "Uncredited", &["Documentary"], &[], 7.5),
        ];

        let err = rank(&records, &RankConfig::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyActorList);

        // Not selected by the genre filter, so it is never scored
        let config = RankConfig::new().with_genres(GenreFilter::parse("Drama"));
        let ranked = rank(&records, &config).unwrap();
        assert_eq!(ranked, vec![RankedEntry::new("Cast", 7.0)]);
    }
}
