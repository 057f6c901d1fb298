//! Service-record construction from consolidated raw rows.

use chrono::NaiveDate;
use tracing::warn;
use wj_canon::{SongCatalog, canonicalize_leader};
use wj_model::{RawServiceRow, ServiceRecord, SongId, UNKNOWN_LEADER};

use crate::error::{IngestError, Result};

/// Date format of the history sheet.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build one record, interning every song the row mentions into the catalog.
///
/// An unparseable date rejects the row with its source position. An empty
/// leader goes to the [`UNKNOWN_LEADER`] bucket; empty or unrecognized song
/// cells degrade to "no song".
pub fn build_record(row: &RawServiceRow, songs: &mut SongCatalog) -> Result<ServiceRecord> {
    let date =
        NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT).map_err(|_| {
            IngestError::MalformedDate {
                value: row.date.clone(),
                row: row.row_number,
            }
        })?;
    let mut leader = canonicalize_leader(&row.leader);
    if leader.is_empty() {
        warn!(row = row.row_number, "service has no leader");
        leader = UNKNOWN_LEADER.to_string();
    }
    Ok(ServiceRecord {
        date,
        leader,
        theme: row.theme.trim().to_string(),
        praise1: canonicalize_slots(songs, &row.praise1),
        praise2: canonicalize_slots(songs, &row.praise2),
        peace: canonicalize_slots(songs, &row.peace),
    })
}

/// Build all records in input order. The first malformed date aborts the
/// whole run; partial statistics are never produced.
pub fn build_records(
    rows: &[RawServiceRow],
    songs: &mut SongCatalog,
) -> Result<Vec<ServiceRecord>> {
    rows.iter().map(|row| build_record(row, songs)).collect()
}

fn canonicalize_slots(songs: &mut SongCatalog, slots: &[String]) -> Vec<SongId> {
    slots
        .iter()
        .flat_map(|slot| songs.canonicalize(slot))
        .collect()
}
