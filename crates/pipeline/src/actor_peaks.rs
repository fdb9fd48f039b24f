//! Per-actor peak ratings.
//!
//! ## Algorithm
//! 1. For every record, for every billed actor, keep the highest critic
//!    rating seen so far
//! 2. A movie's actor rating is the mean of its actors' peaks
//!
//! The table is built over every record handed to the ranker, before any
//! genre filtering, so a peak can come from a movie outside the requested
//! genres.

use data_loader::{MovieDataError, MovieRecord, Result};
use rayon::prelude::*;
use std::collections::HashMap;

/// Highest critic rating per actor across a record set.
///
/// Borrows actor names from the records it was built from.
#[derive(Debug, Clone, Default)]
pub struct ActorPeakRatings<'a> {
    peaks: HashMap<&'a str, f64>,
}

impl<'a> ActorPeakRatings<'a> {
    /// Build the table over `records`.
    ///
    /// Records are folded into per-thread maps and merged; `max` makes the
    /// result independent of how rayon splits the work.
    pub fn build(records: &'a [MovieRecord]) -> Self {
        let peaks = records
            .par_iter()
            .fold(
                HashMap::new,
                |mut local: HashMap<&'a str, f64>, record| {
                    for actor in &record.actors {
                        raise(&mut local, actor.as_str(), record.rating);
                    }
                    local
                },
            )
            .reduce(HashMap::new, |mut acc, local| {
                for (actor, peak) in local {
                    raise(&mut acc, actor, peak);
                }
                acc
            });

        Self { peaks }
    }

    /// Peak rating for `actor`, if they appear in the table
    pub fn get(&self, actor: &str) -> Option<f64> {
        self.peaks.get(actor).copied()
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Mean peak rating over `record`'s actors.
    ///
    /// `record` is expected to be one of the records the table was built
    /// from. For any other record, an actor missing from the table counts
    /// with `record.rating`, the peak they would have if `record` had been
    /// part of the build; actors already in the table keep their peak even
    /// if `record.rating` is higher.
    ///
    /// Fails with `EmptyActorList` when the record lists no actors.
    pub fn actor_rating(&self, record: &MovieRecord) -> Result<f64> {
        if record.actors.is_empty() {
            return Err(MovieDataError::EmptyActorList {
                id: record.id,
                title: record.title.clone(),
            });
        }

        let total: f64 = record
            .actors
            .iter()
            .map(|actor| self.get(actor).unwrap_or(record.rating))
            .sum();

        Ok(total / record.actors.len() as f64)
    }
}

fn raise<'a>(peaks: &mut HashMap<&'a str, f64>, actor: &'a str, rating: f64) {
    peaks
        .entry(actor)
        .and_modify(|peak| *peak = peak.max(rating))
        .or_insert(rating);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, actors: &[&str], rating: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {id}"),
            genres: vec!["Drama".to_string()],
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
    fn test_peaks_take_maximum() {
        let records = vec![
            movie(1, &["Christian Bale", "Heath Ledger"], 9.0),
            movie(2, &["Christian Bale", "Hugh Jackman"], 8.5),
            movie(3, &["Hugh Jackman"], 6.1),
        ];

        let peaks = ActorPeakRatings::build(&records);

        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks.get("Christian Bale"), Some(9.0));
        assert_eq!(peaks.get("Heath Ledger"), Some(9.0));
        assert_eq!(peaks.get("Hugh Jackman"), Some(8.5));
        assert_eq!(peaks.get("Nobody"), None);
    }

    #[test]
    fn test_actor_rating_is_mean_of_peaks() {
        let records = vec![
            movie(1, &["A", "B"], 9.0),
            movie(2, &["A", "C"], 7.0),
        ];
        let peaks = ActorPeakRatings::build(&records);

        // A = 9.0, C = 7.0
        assert_eq!(peaks.actor_rating(&records[1]).unwrap(), 8.0);
        assert_eq!(peaks.actor_rating(&records[0]).unwrap(), 9.0);
    }

    #[test]
    fn test_actor_rating_for_record_outside_table() {
        let records = vec![movie(1, &["A"], 9.0)];
        let peaks = ActorPeakRatings::build(&records);

        // "A" keeps the table's 9.0; unknown "D" counts with the record's own 6.0
        let outsider = movie(2, &["A", "D"], 6.0);
        assert_eq!(peaks.actor_rating(&outsider).unwrap(), 7.5);
        assert_eq!(peaks.get("D"), None);
    }

    #[test]
    fn test_empty_actor_list() {
        let records = vec![movie(7, &[], 7.0)];
        let peaks = ActorPeakRatings::build(&records);

        assert!(peaks.is_empty());
        let err = peaks.actor_rating(&records[0]).unwrap_err();
        assert!(matches!(err, MovieDataError::EmptyActorList { id: 7, .. }));
    }

    #[test]
    fn test_empty_input() {
        let peaks = ActorPeakRatings::build(&[]);
        assert!(peaks.is_empty());
    }
}
