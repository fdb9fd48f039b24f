use data_loader::load;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/films.csv"));

    println!("Loading {}...\n", path.display());

    let start = Instant::now();
    let records = load(&path, 0).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let actors: usize = records.iter().map(|r| r.actors.len()).sum();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", records.len());
    println!("Actor credits: {}", actors);
    println!("\nPerformance: {:.0} records/second",
             records.len() as f64 / elapsed.as_secs_f64());
}
