pub mod record;
pub mod song;
pub mod stats;

pub use record::{RawServiceRow, ServiceRecord, UNKNOWN_LEADER, WeekendRole};
pub use song::{CanonicalPublisher, CanonicalSong, PublisherId, SongId};
pub use stats::{
    GlobalStats, JourneyStats, LeaderOverlap, LeaderStats, MultiLeaderSong, PublisherTally,
    RankedSong, SongPublisher,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn record_song_count_sums_all_slots() {
        let record = ServiceRecord {
            date: date(2025, 3, 2),
            leader: "Phoebe".to_string(),
            theme: "Grace".to_string(),
            praise1: vec![SongId(0), SongId(1)],
            praise2: vec![SongId(2)],
            peace: vec![SongId(3)],
        };
        assert_eq!(record.song_count(), 4);
        assert_eq!(record.year(), 2025);
        assert_eq!(record.all_songs().count(), 4);
    }

    #[test]
    fn weekend_role_labels() {
        assert_eq!(WeekendRole::Saturday.as_str(), "Saturday Worship");
        assert_eq!(WeekendRole::Sunday.as_str(), "Sunday Worship");
    }

    #[test]
    fn stats_serialize_round_trip() {
        let stats = GlobalStats {
            year: 2025,
            total_services: 52,
            total_unique_songs: 3,
            praise1_top: vec![RankedSong {
                name: "Cornerstone".to_string(),
                count: 4,
            }],
            praise2_top: vec![],
            combined_top: vec![],
            multi_leader_top: vec![],
            peace_top: vec![],
            new_songs: vec!["新歌".to_string()],
            dropped_songs: vec![],
            new_songs_usage: 1,
            unique_songs: vec!["Cornerstone".to_string(), "新歌".to_string()],
            song_publishers: vec![],
            publisher_tally: vec![],
        };
        let json = serde_json::to_string(&stats).expect("serialize stats");
        let round: GlobalStats = serde_json::from_str(&json).expect("deserialize stats");
        assert_eq!(round.year, 2025);
        assert_eq!(round.praise1_top[0].count, 4);
    }
}
