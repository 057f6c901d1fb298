//! Per-leader statistics.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;
use wj_canon::SongCatalog;
use wj_model::{LeaderOverlap, LeaderStats, ServiceRecord, SongId};

use crate::counter::SongCounter;

const TOP_SONGS: usize = 20;
const TOP_OVERLAPS: usize = 2;
/// Per-leader history spans the three years preceding the target year.
const HISTORY_YEARS: i32 = 3;

/// Compute one section per leader active in the target year, leader name
/// ascending.
///
/// New-song detection compares against the same leader's own records over
/// the preceding window; the global new-song check uses a different ground
/// truth (the external reference list) and lives in [`crate::global`].
pub fn leader_stats(records: &[ServiceRecord], catalog: &SongCatalog, year: i32) -> Vec<LeaderStats> {
    let history_years = (year - HISTORY_YEARS)..year;
    let mut history: BTreeMap<&str, BTreeSet<SongId>> = BTreeMap::new();
    for record in records.iter().filter(|r| history_years.contains(&r.year())) {
        history
            .entry(record.leader.as_str())
            .or_default()
            .extend(record.all_songs());
    }

    let mut by_leader: BTreeMap<&str, Vec<&ServiceRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.year() == year) {
        by_leader
            .entry(record.leader.as_str())
            .or_default()
            .push(record);
    }

    let songs_of: BTreeMap<&str, BTreeSet<SongId>> = by_leader
        .iter()
        .map(|(leader, services)| {
            let set = services.iter().flat_map(|r| r.all_songs()).collect();
            (*leader, set)
        })
        .collect();

    let empty_history = BTreeSet::new();
    let mut sections = Vec::new();
    for (leader, services) in &by_leader {
        let mut praise1 = SongCounter::default();
        let mut praise2 = SongCounter::default();
        let mut peace = SongCounter::default();
        let mut combined = SongCounter::default();
        for service in services {
            praise1.record_all(&service.praise1, service.date);
            praise2.record_all(&service.praise2, service.date);
            peace.record_all(&service.peace, service.date);
            for id in service.all_songs() {
                combined.record(id, service.date);
            }
        }

        let own_songs = &songs_of[leader];
        let past = history.get(leader).unwrap_or(&empty_history);
        let mut new_songs: Vec<String> = own_songs
            .difference(past)
            .map(|id| catalog.display_name(*id).to_string())
            .collect();
        new_songs.sort();

        let mut overlaps: Vec<LeaderOverlap> = songs_of
            .iter()
            .filter(|(other, _)| **other != *leader)
            .map(|(other, set)| LeaderOverlap {
                leader: (*other).to_string(),
                shared: own_songs.intersection(set).count(),
            })
            .filter(|overlap| overlap.shared > 0)
            .collect();
        overlaps.sort_by(|a, b| b.shared.cmp(&a.shared).then_with(|| a.leader.cmp(&b.leader)));
        overlaps.truncate(TOP_OVERLAPS);

        let common_songs_count = own_songs
            .iter()
            .filter(|id| {
                songs_of
                    .iter()
                    .any(|(other, set)| *other != *leader && set.contains(*id))
            })
            .count();

        sections.push(LeaderStats {
            name: (*leader).to_string(),
            total_services: services.len(),
            total_songs: combined.total(),
            praise1_top: praise1.ranked(catalog, TOP_SONGS),
            praise2_top: praise2.ranked(catalog, TOP_SONGS),
            peace_top: peace.ranked(catalog, TOP_SONGS),
            combined_top: combined.ranked(catalog, TOP_SONGS),
            new_songs,
            common_songs_count,
            top_overlaps: overlaps,
        });
    }
    info!(leaders = sections.len(), year, "per-leader statistics computed");
    sections
}
