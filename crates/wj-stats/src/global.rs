//! Global statistics across all services of the target year.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;
use wj_canon::{SongCatalog, UNKNOWN_PUBLISHER};
use wj_model::{GlobalStats, MultiLeaderSong, PublisherTally, ServiceRecord, SongId, SongPublisher};

use crate::counter::SongCounter;

const TOP_SONGS: usize = 20;
const TOP_MULTI_LEADER: usize = 10;
const TOP_PEACE: usize = 3;
/// A song counts as multi-leader once this many distinct leaders chose it.
const MULTI_LEADER_MIN: usize = 3;

/// Compute the global section.
///
/// `reference` is the set of songs known through the end of the previous
/// year, resolved from the external reference list; it is the ground truth
/// for the global new-song check (deliberately not re-derived from the
/// historical records). `publishers` maps each song to its resolved
/// copyright holder.
pub fn global_stats(
    records: &[ServiceRecord],
    catalog: &SongCatalog,
    reference: &BTreeSet<SongId>,
    publishers: &BTreeMap<SongId, String>,
    year: i32,
) -> GlobalStats {
    let mut year_records: Vec<&ServiceRecord> =
        records.iter().filter(|r| r.year() == year).collect();
    year_records.sort_by_key(|r| r.date);

    let mut praise1 = SongCounter::default();
    let mut praise2 = SongCounter::default();
    let mut combined = SongCounter::default();
    let mut peace = SongCounter::default();
    let mut all = SongCounter::default();
    let mut leaders_by_song: BTreeMap<SongId, BTreeSet<&str>> = BTreeMap::new();
    for record in &year_records {
        praise1.record_all(&record.praise1, record.date);
        praise2.record_all(&record.praise2, record.date);
        peace.record_all(&record.peace, record.date);
        for id in record.praise1.iter().chain(record.praise2.iter()) {
            combined.record(*id, record.date);
            leaders_by_song
                .entry(*id)
                .or_default()
                .insert(record.leader.as_str());
        }
        for id in record.all_songs() {
            all.record(id, record.date);
        }
    }

    let year_songs: BTreeSet<SongId> = all.ids().collect();

    let mut multi_leader: Vec<MultiLeaderSong> = leaders_by_song
        .iter()
        .filter(|(_, leaders)| leaders.len() >= MULTI_LEADER_MIN)
        .map(|(id, leaders)| MultiLeaderSong {
            name: catalog.display_name(*id).to_string(),
            leader_count: leaders.len(),
            leaders: leaders.iter().map(|leader| (*leader).to_string()).collect(),
            count: combined.count(*id),
        })
        .collect();
    multi_leader.sort_by(|a, b| {
        b.leader_count
            .cmp(&a.leader_count)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.name.cmp(&b.name))
    });
    multi_leader.truncate(TOP_MULTI_LEADER);

    let mut new_songs: Vec<String> = year_songs
        .difference(reference)
        .map(|id| catalog.display_name(*id).to_string())
        .collect();
    new_songs.sort();

    let previous_songs: BTreeSet<SongId> = records
        .iter()
        .filter(|r| r.year() == year - 1)
        .flat_map(|r| r.all_songs())
        .collect();
    let mut dropped_songs: Vec<String> = previous_songs
        .difference(&year_songs)
        .map(|id| catalog.display_name(*id).to_string())
        .collect();
    dropped_songs.sort();

    let new_ids: BTreeSet<SongId> = year_songs.difference(reference).copied().collect();
    let new_songs_usage = first_appearance_services(&year_records, &new_ids);

    let mut unique_songs: Vec<String> = year_songs
        .iter()
        .map(|id| catalog.display_name(*id).to_string())
        .collect();
    unique_songs.sort();

    let mut song_publishers: Vec<SongPublisher> = year_songs
        .iter()
        .map(|id| SongPublisher {
            song: catalog.display_name(*id).to_string(),
            publisher: publishers
                .get(id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string()),
        })
        .collect();
    song_publishers.sort_by(|a, b| a.song.cmp(&b.song));

    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in &song_publishers {
        *tally.entry(entry.publisher.as_str()).or_default() += 1;
    }
    let mut publisher_tally: Vec<PublisherTally> = tally
        .into_iter()
        .map(|(publisher, songs)| PublisherTally {
            publisher: publisher.to_string(),
            songs,
        })
        .collect();
    publisher_tally.sort_by(|a, b| b.songs.cmp(&a.songs).then_with(|| a.publisher.cmp(&b.publisher)));

    info!(
        year,
        services = year_records.len(),
        unique_songs = year_songs.len(),
        new_songs = new_songs.len(),
        "global statistics computed"
    );

    GlobalStats {
        year,
        total_services: year_records.len(),
        total_unique_songs: all.distinct(),
        praise1_top: praise1.ranked(catalog, TOP_SONGS),
        praise2_top: praise2.ranked(catalog, TOP_SONGS),
        combined_top: combined.ranked(catalog, TOP_SONGS),
        multi_leader_top: multi_leader,
        peace_top: peace.ranked(catalog, TOP_PEACE),
        new_songs,
        dropped_songs,
        new_songs_usage,
        unique_songs,
        song_publishers,
        publisher_tally,
    }
}

/// Count services that are the first appearance of at least one new song.
///
/// Once a new song has contributed to a counted service it is spent; later
/// services using only spent new songs do not count. Records must already
/// be sorted by date.
fn first_appearance_services(year_records: &[&ServiceRecord], new_ids: &BTreeSet<SongId>) -> usize {
    let mut remaining = new_ids.clone();
    let mut services = 0;
    for record in year_records {
        let mut contributed = false;
        for id in record.all_songs() {
            if remaining.remove(&id) {
                contributed = true;
            }
        }
        if contributed {
            services += 1;
        }
    }
    services
}
