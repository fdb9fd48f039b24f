//! Plain-text output of a ranking.
//!
//! One entry per line: `<title>, <score to one decimal>`.

use data_loader::{MovieDataError, Result};
use pipeline::RankedEntry;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Render a single output line (without the newline)
///
/// Example: ("The Dark Knight", 9.0) -> "The Dark Knight, 9.0"
pub fn format_entry(entry: &RankedEntry) -> String {
    format!("{}, {:.1}", entry.title, entry.score)
}

/// Write `entries` to `path`, one line each, replacing any existing file.
///
/// `path` must have a `.txt` extension. Lines go to a temporary file in the
/// same directory which is then renamed over `path`, so on failure `path`
/// is either untouched or absent, never half-written.
pub fn write_ranked(entries: &[RankedEntry], path: &Path) -> Result<()> {
    if path.extension().is_none_or(|ext| ext != "txt") {
        return Err(MovieDataError::InvalidInput(format!(
            "output file must be a .txt file, got {}",
            path.display()
        )));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;

    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        for entry in entries {
            writeln!(out, "{}", format_entry(entry))?;
        }
        out.flush()?;
    }

    // Dropping `tmp` on any error above removes it
    tmp.persist(path).map_err(|e| e.error)?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
