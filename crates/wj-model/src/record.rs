use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::song::SongId;

/// Bucket used for services whose leader cell is empty after canonicalization.
pub const UNKNOWN_LEADER: &str = "Unknown";

/// One consolidated input row as supplied by the ingestion layer.
///
/// Continuation rows have already been merged into their parent row; every
/// field is still raw text. Song slots are grouped but not yet canonicalized,
/// so one slot string may later expand to zero or several songs.
#[derive(Debug, Clone)]
pub struct RawServiceRow {
    /// 1-based row position in the source file, for error reporting.
    pub row_number: usize,
    pub date: String,
    pub leader: String,
    pub theme: String,
    pub praise1: Vec<String>,
    pub praise2: Vec<String>,
    pub peace: Vec<String>,
}

/// One worship service with all fields canonicalized. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub date: NaiveDate,
    /// Canonical leader name; [`UNKNOWN_LEADER`] when the source had none.
    pub leader: String,
    /// Free text, preserved verbatim for display.
    pub theme: String,
    pub praise1: Vec<SongId>,
    pub praise2: Vec<SongId>,
    pub peace: Vec<SongId>,
}

impl ServiceRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// All songs of the service in slot order (praise1, praise2, peace).
    pub fn all_songs(&self) -> impl Iterator<Item = SongId> + '_ {
        self.praise1
            .iter()
            .chain(self.praise2.iter())
            .chain(self.peace.iter())
            .copied()
    }

    pub fn song_count(&self) -> usize {
        self.praise1.len() + self.praise2.len() + self.peace.len()
    }
}

/// Label derived from two services on consecutive calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekendRole {
    Saturday,
    Sunday,
}

impl WeekendRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekendRole::Saturday => "Saturday Worship",
            WeekendRole::Sunday => "Sunday Worship",
        }
    }
}

impl fmt::Display for WeekendRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
