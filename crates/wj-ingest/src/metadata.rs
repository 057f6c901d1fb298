//! Song-index metadata loading.
//!
//! The song index is a CSV whose real header sits below a banner row; the
//! columns are index number, song name, copyright. Only the resolved
//! name → copyright mapping leaves this module.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// 0-based row at which the real header of the song index sits.
pub const SONG_INDEX_HEADER_ROW: usize = 1;

const NAME_COL: usize = 1;
const COPYRIGHT_COL: usize = 2;

/// Load the song index from a file using the standard header offset.
pub fn load_song_index(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_song_index(file, SONG_INDEX_HEADER_ROW)
}

/// Read the song index from any reader, skipping everything up to and
/// including the header row. The first occurrence of a song name wins.
pub fn read_song_index<R: Read>(
    reader: R,
    header_row: usize,
) -> Result<BTreeMap<String, String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut index = BTreeMap::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        if row <= header_row {
            continue;
        }
        let name = record.get(NAME_COL).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let copyright = record.get(COPYRIGHT_COL).unwrap_or("").trim();
        index
            .entry(name.to_string())
            .or_insert_with(|| copyright.to_string());
    }
    if index.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(songs = index.len(), "song index loaded");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "\
Song Index 2025,,
No.,Song,Copyright
1,Cornerstone,Hillsong
2,讚美的孩子,Stream of Praise
3,讚美的孩子,Duplicate Entry
4,,Orphan Copyright
";

    #[test]
    fn skips_banner_and_header_rows() {
        let index = read_song_index(INDEX.as_bytes(), 1).expect("read index");
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("Cornerstone").map(String::as_str), Some("Hillsong"));
    }

    #[test]
    fn first_entry_wins_for_duplicates() {
        let index = read_song_index(INDEX.as_bytes(), 1).expect("read index");
        assert_eq!(
            index.get("讚美的孩子").map(String::as_str),
            Some("Stream of Praise")
        );
    }

    #[test]
    fn empty_index_is_an_error() {
        let err = read_song_index("banner,,\nNo.,Song,Copyright\n".as_bytes(), 1).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput));
    }
}
