//! Copyright resolution for the yearly song list.

use std::collections::BTreeMap;

use wj_canon::{CanonicalForm, PublisherCatalog, SongCatalog, normalize};
use wj_model::{ServiceRecord, SongId};

/// Resolve each distinct target-year song to its canonical publisher name.
///
/// The copyright map comes from the song index keyed by whatever spelling
/// that file uses, so the lookup goes through canonical forms and tries
/// every known variant of the song. Interns unseen copyright spellings,
/// which is why this runs in the build phase, before the catalogs are
/// handed to aggregation by shared reference.
pub fn resolve_song_publishers(
    records: &[ServiceRecord],
    year: i32,
    songs: &SongCatalog,
    publishers: &mut PublisherCatalog,
    copyright_by_name: &BTreeMap<String, String>,
) -> BTreeMap<SongId, String> {
    let by_form: BTreeMap<CanonicalForm, &str> = copyright_by_name
        .iter()
        .map(|(name, copyright)| (normalize(name), copyright.as_str()))
        .collect();

    let mut resolved = BTreeMap::new();
    for record in records.iter().filter(|r| r.year() == year) {
        for id in record.all_songs() {
            if resolved.contains_key(&id) {
                continue;
            }
            let song = songs.song(id);
            let raw = song
                .variants
                .iter()
                .find_map(|variant| by_form.get(&normalize(variant)).copied())
                .unwrap_or("");
            let publisher = publishers.canonicalize(raw, Some(&song.display_name));
            resolved.insert(id, publishers.display_name(publisher).to_string());
        }
    }
    resolved
}
