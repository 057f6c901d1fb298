//! Reference list of songs known through the end of the comparison window.
//!
//! A plain-text artifact maintained outside this system, one song per line.
//! Entries may still contain `+`/`/` combinations; the caller canonicalizes
//! them with the regular song-splitting rules before set comparison.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Load the reference list from a file.
pub fn load_reference_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_reference_list(BufReader::new(file))
}

/// Read the reference list from any buffered reader, skipping blank lines.
pub fn read_reference_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        entries.push(trimmed.to_string());
    }
    debug!(entries = entries.len(), "reference list loaded");
    Ok(entries)
}
