//! Output-only aggregates handed to the report renderer.
//!
//! Everything here is plain structured data: names, counts, and lists. No
//! presentation concerns, fully serializable, recomputed from scratch on each
//! run.

use serde::{Deserialize, Serialize};

/// One entry of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSong {
    pub name: String,
    pub count: usize,
}

/// A song used by several distinct leaders within the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLeaderSong {
    pub name: String,
    pub leader_count: usize,
    /// Leader names, ascending.
    pub leaders: Vec<String>,
    /// Total praise1+praise2 occurrences within the year.
    pub count: usize,
}

/// Size of the repertoire intersection with another leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderOverlap {
    pub leader: String,
    pub shared: usize,
}

/// A song paired with its resolved copyright holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPublisher {
    pub song: String,
    pub publisher: String,
}

/// Distinct-song count per publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherTally {
    pub publisher: String,
    pub songs: usize,
}

/// Statistics for one leader over the target year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderStats {
    pub name: String,
    pub total_services: usize,
    /// Sum of praise1+praise2+peace song counts across this leader's services.
    pub total_songs: usize,
    pub praise1_top: Vec<RankedSong>,
    pub praise2_top: Vec<RankedSong>,
    pub peace_top: Vec<RankedSong>,
    pub combined_top: Vec<RankedSong>,
    /// Songs first led by this leader in the target year (absent from the
    /// same leader's records over the three preceding years), ascending.
    pub new_songs: Vec<String>,
    /// Distinct target-year songs also used by at least one other leader.
    pub common_songs_count: usize,
    /// The two other leaders with the largest repertoire intersection.
    pub top_overlaps: Vec<LeaderOverlap>,
}

/// Statistics over all services of the target year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalStats {
    pub year: i32,
    pub total_services: usize,
    pub total_unique_songs: usize,
    pub praise1_top: Vec<RankedSong>,
    pub praise2_top: Vec<RankedSong>,
    /// Praise1+praise2 combined; peace excluded.
    pub combined_top: Vec<RankedSong>,
    /// Praise1+praise2 songs used by at least three distinct leaders.
    pub multi_leader_top: Vec<MultiLeaderSong>,
    pub peace_top: Vec<RankedSong>,
    /// Songs absent from the external "known through last year" reference
    /// list, ascending.
    pub new_songs: Vec<String>,
    /// Songs used in the previous year but absent from the target year.
    pub dropped_songs: Vec<String>,
    /// Number of services that were the first appearance of at least one new
    /// song. A new song contributes only to the service it first appeared in.
    pub new_songs_usage: usize,
    /// Every distinct song of the target year, ascending.
    pub unique_songs: Vec<String>,
    /// Resolved copyright holder per unique song.
    pub song_publishers: Vec<SongPublisher>,
    /// Publishers ranked by distinct-song count descending, then name.
    pub publisher_tally: Vec<PublisherTally>,
}

/// Full output of one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyStats {
    /// Per-leader sections, leader name ascending.
    pub leaders: Vec<LeaderStats>,
    pub global: GlobalStats,
}
