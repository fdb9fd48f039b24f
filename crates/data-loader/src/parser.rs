//! Parser for the `;`-delimited movie file.
//!
//! Line format (after a single header line):
//! `id;title;genres;description;director;actors;year;runtime;rating;votes;revenue;metascore`
//!
//! - genres are comma-separated: `Action,Adventure,Sci-Fi`
//! - actors are comma-and-space separated: `Chris Pratt, Vin Diesel`
//! - revenue and metascore may be blank
//!
//! Parsing is strict: the first bad line aborts the whole load.

use crate::error::{MovieDataError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Load every record with `year >= year_floor` from the file at `path`.
///
/// A `year_floor` of 0 keeps every record. Records come back in file order.
#[instrument]
pub fn load(path: &Path, year_floor: i32) -> Result<Vec<MovieRecord>> {
    if path.as_os_str().is_empty() {
        return Err(MovieDataError::InvalidInput("data path is empty".to_string()));
    }
    check_year_floor(year_floor)?;

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MovieDataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => MovieDataError::IoFailure(e),
    })?;

    load_from_reader(BufReader::new(file), year_floor)
}

/// Same as [`load`], reading from any buffered source.
pub fn load_from_reader<R: BufRead>(reader: R, year_floor: i32) -> Result<Vec<MovieRecord>> {
    check_year_floor(year_floor)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let line = decode_line(bytes?, line_no)?;

        // Line 1 is the header
        if line_no == 1 || line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line, line_no)?;
        if year_floor == 0 || record.year >= year_floor {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    debug!(kept = records.len(), dropped, year_floor, "Loaded movie records");
    Ok(records)
}

/// Invalid UTF-8 is a format problem on that line, not an I/O failure
fn decode_line(bytes: Vec<u8>, line_no: usize) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| MovieDataError::MalformedRecord {
        line: line_no,
        field: "line",
        value: String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

fn check_year_floor(year_floor: i32) -> Result<()> {
    if year_floor < 0 {
        return Err(MovieDataError::InvalidInput(format!(
            "year floor must be >= 0, got {}",
            year_floor
        )));
    }
    Ok(())
}

/// Parse one data line into a [`MovieRecord`].
///
/// `line_no` is only used for error context.
pub fn parse_record(line: &str, line_no: usize) -> Result<MovieRecord> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(MovieDataError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: fields.len(),
            line: line_no,
        });
    }

    let rating: f64 = parse_field(fields[8], "rating", line_no)?;
    if !rating.is_finite() {
        return Err(malformed(fields[8], "rating", line_no));
    }

    Ok(MovieRecord {
        id: parse_field(fields[0], "id", line_no)?,
        title: fields[1].to_string(),
        genres: split_list(fields[2]),
        description: fields[3].to_string(),
        director: fields[4].to_string(),
        actors: split_list(fields[5]),
        year: parse_field(fields[6], "year", line_no)?,
        runtime: parse_field(fields[7], "runtime", line_no)?,
        rating,
        votes: parse_field(fields[9], "votes", line_no)?,
        revenue: parse_optional(fields[10], "revenue", line_no)?,
        metascore: parse_optional(fields[11], "metascore", line_no)?,
    })
}

fn parse_field<T: FromStr>(value: &str, field: &'static str, line_no: usize) -> Result<T> {
    value.parse().map_err(|_| malformed(value, field, line_no))
}

/// Blank means "not reported"; anything else must parse.
fn parse_optional(value: &str, field: &'static str, line_no: usize) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    let parsed: f64 = parse_field(value, field, line_no)?;
    Ok(Some(parsed))
}

fn malformed(value: &str, field: &'static str, line_no: usize) -> MovieDataError {
    MovieDataError::MalformedRecord {
        line: line_no,
        field,
        value: value.to_string(),
    }
}

/// Split a comma-separated list, dropping blank entries
///
/// Example: "Chris Pratt, Vin Diesel" -> ["Chris Pratt", "Vin Diesel"]
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
