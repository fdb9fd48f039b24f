use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use pipeline::{RankConfig, RankedEntry};
use service::{format_entry, TopMoviesRequest, TopMoviesService};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// Top Movies - rank a movie dataset by critic and actor ratings
///
/// Any of --file, --year, --genre or --count left out is asked for
/// interactively.
#[derive(Parser)]
#[command(name = "top-movies")]
#[command(about = "Rank movies by critic rating blended with their actors' best ratings", long_about = None)]
struct Cli {
    /// Path to the ;-delimited movie file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Earliest release year to include (0 for all years)
    #[arg(short, long, allow_negative_numbers = true)]
    year: Option<i32>,

    /// Genre(s) to filter by, comma-separated (empty for all genres)
    #[arg(short, long)]
    genre: Option<String>,

    /// Number of movies to return (0 for all movies)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Where to write the ranking (must end in .txt)
    #[arg(short, long, default_value = service::orchestrator::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let needs_prompt =
        cli.file.is_none() || cli.year.is_none() || cli.genre.is_none() || cli.count.is_none();
    if needs_prompt {
        println!("{}", "Welcome to the Top Rated Movies service!".bold().blue());
    }

    // Collect the four inputs, prompting for whatever wasn't passed
    let data_path = match cli.file {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut input, "Enter the path to the CSV file with movie data: ")?),
    };
    let year = match cli.year {
        Some(year) => year,
        None => parse_or_default(&prompt(
            &mut input,
            "Enter the starting year for filtering movies (0 for all years): ",
        )?),
    };
    let genre = match cli.genre {
        Some(genre) => genre,
        None => prompt(
            &mut input,
            "Enter the genre(s) to filter by (separate by commas for multiple genres): ",
        )?,
    };
    let count = match cli.count {
        Some(count) => count,
        None => parse_or_default(&prompt(
            &mut input,
            "Enter the number of top-rated movies to return (0 for all movies): ",
        )?),
    };

    let rank = RankConfig::from_raw(&genre, count)?;
    let request = TopMoviesRequest::new(data_path)
        .with_year_floor(year)
        .with_rank_config(rank);

    let summary = TopMoviesService::new()
        .with_output_path(cli.output)
        .run(&request)
        .with_context(|| format!("Could not rank movies from {}", request.data_path.display()))?;

    match summary.output {
        Some(path) => {
            print_ranking(&summary.entries);
            println!(
                "Ranked {} of {} loaded movies in {:.2?}",
                summary.entries.len(),
                summary.loaded,
                summary.elapsed
            );
            println!(
                "{} The top-rated movies have been written to '{}'.",
                "✓".green(),
                path.display()
            );
        }
        None => println!("No movies found for the given criteria."),
    }
    Ok(())
}

/// Print `question`, then read one line. EOF reads as blank.
fn prompt(input: &mut impl BufRead, question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Blank or unparseable answers fall back to the type's default (0)
fn parse_or_default<T: FromStr + Default>(answer: &str) -> T {
    answer.trim().parse().unwrap_or_default()
}

fn print_ranking(entries: &[RankedEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), format_entry(entry));
    }
}
