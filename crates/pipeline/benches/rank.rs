//! Benchmarks for ranking
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic dataset shaped like the IMDB 1000 export: four billed
//! actors per movie drawn from a shared pool.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::MovieRecord;
use pipeline::{rank, ActorPeakRatings, GenreFilter, RankConfig};

const GENRES: [&str; 6] = ["Action", "Adventure", "Drama", "Horror", "Sci-Fi", "Thriller"];

fn synthetic_records(count: u32) -> Vec<MovieRecord> {
    (0..count)
        .map(|i| MovieRecord {
            id: i + 1,
            title: format!("Movie {i}"),
            genres: vec![
                GENRES[i as usize % GENRES.len()].to_string(),
                GENRES[(i as usize / 2) % GENRES.len()].to_string(),
            ],
            description: String::new(),
            director: format!("Director {}", i % 50),
            actors: (0..4).map(|a| format!("Actor {}", (i * 7 + a * 13) % 1500)).collect(),
            year: 2006 + (i % 11) as i32,
            runtime: 90 + i % 60,
            rating: 5.0 + (i % 40) as f64 / 10.0,
            votes: 1000 + i as u64,
            revenue: None,
            metascore: None,
        })
        .collect()
}

fn bench_actor_peaks(c: &mut Criterion) {
    let records = synthetic_records(1000);

    c.bench_function("actor_peaks_build", |b| {
        b.iter(|| {
            let peaks = ActorPeakRatings::build(black_box(&records));
            black_box(peaks.len())
        })
    });
}

fn bench_rank_all(c: &mut Criterion) {
    let records = synthetic_records(1000);
    let config = RankConfig::new();

    c.bench_function("rank_all", |b| {
        b.iter(|| {
            let ranked = rank(black_box(&records), black_box(&config)).unwrap();
            black_box(ranked)
        })
    });
}

fn bench_rank_genre_top5(c: &mut Criterion) {
    let records = synthetic_records(1000);
    let config = RankConfig::new()
        .with_genres(GenreFilter::parse("Action,Adventure"))
        .with_top_n(5);

    c.bench_function("rank_genre_top5", |b| {
        b.iter(|| {
            let ranked = rank(black_box(&records), black_box(&config)).unwrap();
            black_box(ranked)
        })
    });
}

criterion_group!(
    benches,
    bench_actor_peaks,
    bench_rank_all,
    bench_rank_genre_top5
);
criterion_main!(benches);
