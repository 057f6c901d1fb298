//! Praise-history CSV loading and continuation-row consolidation.
//!
//! The sheet has one row per service; a row whose date cell is empty
//! continues the previous service (long song lists wrap onto extra rows) and
//! is merged into it cell-wise before any field interpretation happens.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use wj_model::RawServiceRow;

use crate::error::{IngestError, Result};

const DATE_COL: usize = 0;
const LEADER_COL: usize = 1;
const THEME_COL: usize = 2;
const PRAISE1_COLS: [usize; 3] = [3, 5, 7];
const PRAISE2_COLS: [usize; 3] = [9, 11, 13];
const PEACE_COLS: [usize; 1] = [15];
/// Rows are padded to this width so slot columns always exist.
const MIN_COLUMNS: usize = 17;

/// Load the praise-history sheet from a file.
pub fn load_history(path: &Path) -> Result<Vec<RawServiceRow>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_history(file)
}

/// Read the praise-history sheet from any reader.
///
/// The first row is the header. Continuation rows are merged into their
/// parent; a continuation with no parent row is dropped. Fails with
/// [`IngestError::EmptyInput`] when no service rows remain.
pub fn read_history<R: Read>(reader: R) -> Result<Vec<RawServiceRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut cells: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
        if cells.len() < MIN_COLUMNS {
            cells.resize(MIN_COLUMNS, String::new());
        }
        // 1-based source position; the header occupies row 1.
        rows.push((idx + 2, cells));
    }
    let consolidated = consolidate(rows);
    if consolidated.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    Ok(consolidated.into_iter().map(row_from_cells).collect())
}

fn consolidate(rows: Vec<(usize, Vec<String>)>) -> Vec<(usize, Vec<String>)> {
    let mut out: Vec<(usize, Vec<String>)> = Vec::new();
    for (number, cells) in rows {
        if cells[DATE_COL].is_empty() {
            let Some((_, current)) = out.last_mut() else {
                debug!(row = number, "dropping continuation row with no parent");
                continue;
            };
            for (idx, cell) in cells.iter().enumerate().skip(1) {
                if cell.is_empty() {
                    continue;
                }
                let target = &mut current[idx];
                if target.is_empty() {
                    target.clone_from(cell);
                } else {
                    target.push(' ');
                    target.push_str(cell);
                }
            }
        } else {
            out.push((number, cells));
        }
    }
    out
}

fn row_from_cells((number, cells): (usize, Vec<String>)) -> RawServiceRow {
    RawServiceRow {
        row_number: number,
        date: cells[DATE_COL].clone(),
        leader: cells[LEADER_COL].clone(),
        theme: cells[THEME_COL].clone(),
        praise1: collect_slots(&cells, &PRAISE1_COLS),
        praise2: collect_slots(&cells, &PRAISE2_COLS),
        peace: collect_slots(&cells, &PEACE_COLS),
    }
}

fn collect_slots(cells: &[String], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&idx| cells.get(idx))
        .filter(|cell| !cell.is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date,Praise Leader,Theme,Praise 1,Key,Praise 1,Key,Praise 1,Key,Praise 2,Key,Praise 2,Key,Praise 2,Key,Peace,Key\n";

    fn read(data: &str) -> Vec<RawServiceRow> {
        read_history(data.as_bytes()).expect("read history")
    }

    #[test]
    fn maps_columns_to_slots() {
        let data = format!(
            "{HEADER}2025-06-01,P1: Phoebe,Grace,寶貴十架,G,主愛大能,,,,獻上頌讚,,,,,,願你平安,\n"
        );
        let rows = read(&data);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.row_number, 2);
        assert_eq!(row.date, "2025-06-01");
        assert_eq!(row.leader, "P1: Phoebe");
        assert_eq!(row.theme, "Grace");
        assert_eq!(row.praise1, vec!["寶貴十架", "主愛大能"]);
        assert_eq!(row.praise2, vec!["獻上頌讚"]);
        assert_eq!(row.peace, vec!["願你平安"]);
    }

    #[test]
    fn continuation_rows_merge_into_parent() {
        let data = format!(
            "{HEADER}2025-06-01,Phoebe,Grace,寶貴十架,,,,,,,,,,,,,\n,,,V1 V2,,,,,,,,,,,,,\n"
        );
        let rows = read(&data);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].praise1, vec!["寶貴十架 V1 V2"]);
    }

    #[test]
    fn leading_continuation_row_is_dropped() {
        let data = format!("{HEADER},,,orphan,,,,,,,,,,,,,\n2025-06-01,Phoebe,,,,,,,,,,,,,,,\n");
        let rows = read(&data);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2025-06-01");
    }

    #[test]
    fn short_rows_are_padded() {
        let data = format!("{HEADER}2025-06-01,Phoebe,Grace\n");
        let rows = read(&data);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].praise1.is_empty());
        assert!(rows[0].peace.is_empty());
    }

    #[test]
    fn empty_sheet_is_an_error() {
        let err = read_history(HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput));
    }
}
