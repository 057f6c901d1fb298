//! Occurrence counting with deterministic ranking.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use wj_canon::SongCatalog;
use wj_model::{RankedSong, SongId};

/// Occurrence counter that remembers each song's first appearance, so
/// rankings stay deterministic under equal counts regardless of the order
/// services were visited in.
#[derive(Debug, Default)]
pub(crate) struct SongCounter {
    entries: BTreeMap<SongId, Occurrence>,
}

#[derive(Debug, Clone, Copy)]
struct Occurrence {
    count: usize,
    first_seen: NaiveDate,
}

impl SongCounter {
    pub(crate) fn record(&mut self, id: SongId, date: NaiveDate) {
        self.entries
            .entry(id)
            .and_modify(|occ| {
                occ.count += 1;
                if date < occ.first_seen {
                    occ.first_seen = date;
                }
            })
            .or_insert(Occurrence {
                count: 1,
                first_seen: date,
            });
    }

    pub(crate) fn record_all(&mut self, ids: &[SongId], date: NaiveDate) {
        for id in ids {
            self.record(*id, date);
        }
    }

    pub(crate) fn count(&self, id: SongId) -> usize {
        self.entries.get(&id).map_or(0, |occ| occ.count)
    }

    pub(crate) fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn total(&self) -> usize {
        self.entries.values().map(|occ| occ.count).sum()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = SongId> + '_ {
        self.entries.keys().copied()
    }

    /// Top-N by count descending; ties broken by earlier first appearance,
    /// then by display name ascending.
    pub(crate) fn ranked(&self, catalog: &SongCatalog, limit: usize) -> Vec<RankedSong> {
        let mut items: Vec<(SongId, Occurrence)> =
            self.entries.iter().map(|(id, occ)| (*id, *occ)).collect();
        items.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then_with(|| a.1.first_seen.cmp(&b.1.first_seen))
                .then_with(|| catalog.display_name(a.0).cmp(catalog.display_name(b.0)))
        });
        items
            .into_iter()
            .take(limit)
            .map(|(id, occ)| RankedSong {
                name: catalog.display_name(id).to_string(),
                count: occ.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).expect("valid date")
    }

    fn catalog_with(names: &[&str]) -> (SongCatalog, Vec<SongId>) {
        let mut catalog = SongCatalog::from_groups(&[]).expect("empty tables");
        let ids = names
            .iter()
            .map(|name| catalog.canonicalize(name)[0])
            .collect();
        (catalog, ids)
    }

    #[test]
    fn equal_counts_rank_by_first_appearance() {
        let (catalog, ids) = catalog_with(&["Later Song", "Earlier Song"]);
        let mut counter = SongCounter::default();
        counter.record(ids[0], date(3, 2));
        counter.record(ids[1], date(1, 5));
        let ranked = counter.ranked(&catalog, 20);
        assert_eq!(ranked[0].name, "Earlier Song");
        assert_eq!(ranked[1].name, "Later Song");
    }

    #[test]
    fn higher_count_wins_regardless_of_date() {
        let (catalog, ids) = catalog_with(&["Frequent", "Early"]);
        let mut counter = SongCounter::default();
        counter.record(ids[0], date(6, 1));
        counter.record(ids[0], date(6, 8));
        counter.record(ids[1], date(1, 5));
        let ranked = counter.ranked(&catalog, 20);
        assert_eq!(ranked[0].name, "Frequent");
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn first_seen_tracks_earliest_date() {
        let (catalog, ids) = catalog_with(&["A", "B"]);
        let mut counter = SongCounter::default();
        // Out-of-order visits must not disturb the tie-break.
        counter.record(ids[0], date(5, 4));
        counter.record(ids[0], date(2, 2));
        counter.record(ids[1], date(3, 3));
        counter.record(ids[1], date(4, 6));
        let ranked = counter.ranked(&catalog, 20);
        assert_eq!(ranked[0].name, "A");
    }

    #[test]
    fn totals_and_counts() {
        let (_, ids) = catalog_with(&["A"]);
        let mut counter = SongCounter::default();
        counter.record_all(&[ids[0], ids[0]], date(1, 1));
        assert_eq!(counter.count(ids[0]), 2);
        assert_eq!(counter.total(), 2);
        assert_eq!(counter.distinct(), 1);
    }
}
