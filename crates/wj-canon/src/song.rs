//! Song canonicalization: cleaning, splitting, and alias-group resolution.

use std::collections::BTreeMap;
use std::ops::Range;

use tracing::debug;
use wj_model::{CanonicalSong, SongId};

use crate::error::{CanonError, Result};
use crate::normalize::{CanonicalForm, normalize};
use crate::tables::{self, AliasGroup};

/// Alias-group index plus every song identity interned so far.
///
/// Static groups are loaded first; raw spellings seen afterwards extend the
/// index implicitly, with the first spelling winning the display name. The
/// catalog is built in a single pass over the input and is read-only for the
/// rest of the run (aggregation takes it by shared reference).
#[derive(Debug, Clone)]
pub struct SongCatalog {
    songs: Vec<CanonicalSong>,
    index: BTreeMap<CanonicalForm, SongId>,
}

impl SongCatalog {
    /// Catalog seeded with the built-in alias tables.
    pub fn with_static_tables() -> Result<Self> {
        Self::from_groups(tables::SONG_ALIASES)
    }

    /// Catalog seeded from explicit alias groups.
    ///
    /// Fails if one canonical form is claimed by two different groups; that
    /// is a configuration defect and must not be resolved by picking a side.
    pub fn from_groups(groups: &[AliasGroup]) -> Result<Self> {
        let mut catalog = Self {
            songs: Vec::new(),
            index: BTreeMap::new(),
        };
        for group in groups {
            let id = SongId(catalog.songs.len() as u32);
            let mut song = CanonicalSong::new(group.display);
            for variant in group.variants {
                song.add_variant(variant);
            }
            catalog.songs.push(song);
            catalog.claim(normalize(group.display), id)?;
            for variant in group.variants {
                catalog.claim(normalize(variant), id)?;
            }
        }
        Ok(catalog)
    }

    /// Map one raw song cell to zero, one, or several song identities.
    ///
    /// Empty cells and liturgical markers (Communion, Baptism) yield nothing.
    /// A `+` or `/` splits the cell into independent songs unless the whole
    /// cleaned string matches a known alias, so titles that legitimately
    /// contain a delimiter stay whole when listed.
    pub fn canonicalize(&mut self, raw: &str) -> Vec<SongId> {
        let cleaned = clean_song_text(raw);
        if cleaned.is_empty() || self.is_non_song(&cleaned) {
            return Vec::new();
        }
        if let Some(id) = self.index.get(&normalize(&cleaned)).copied() {
            self.songs[id.0 as usize].add_variant(&cleaned);
            return vec![id];
        }
        if cleaned.contains(['+', '/']) {
            let mut ids = Vec::new();
            for part in cleaned.split(['+', '/']) {
                let part = clean_song_text(part);
                if part.is_empty() || self.is_non_song(&part) {
                    continue;
                }
                ids.push(self.intern(&part));
            }
            return ids;
        }
        vec![self.intern(&cleaned)]
    }

    pub fn display_name(&self, id: SongId) -> &str {
        &self.songs[id.0 as usize].display_name
    }

    pub fn song(&self, id: SongId) -> &CanonicalSong {
        &self.songs[id.0 as usize]
    }

    /// All interned songs in id order.
    pub fn songs(&self) -> &[CanonicalSong] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    fn is_non_song(&self, cleaned: &str) -> bool {
        let form = normalize(cleaned);
        tables::NON_SONG_MARKERS
            .iter()
            .any(|marker| normalize(marker) == form)
    }

    fn intern(&mut self, cleaned: &str) -> SongId {
        let form = normalize(cleaned);
        if let Some(id) = self.index.get(&form).copied() {
            self.songs[id.0 as usize].add_variant(cleaned);
            return id;
        }
        let id = SongId(self.songs.len() as u32);
        debug!(song = cleaned, "new song identity");
        self.songs.push(CanonicalSong::new(cleaned));
        self.index.insert(form, id);
        id
    }

    fn claim(&mut self, form: CanonicalForm, id: SongId) -> Result<()> {
        match self.index.get(&form) {
            Some(existing) if *existing != id => Err(CanonError::AliasConflict {
                form: form.as_str().to_string(),
                first: self.songs[existing.0 as usize].display_name.clone(),
                second: self.songs[id.0 as usize].display_name.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.index.insert(form, id);
                Ok(())
            }
        }
    }
}

/// Clean one raw song string: strip annotations and trailing position
/// markers, collapse whitespace, drop trailing punctuation.
fn clean_song_text(raw: &str) -> String {
    let stripped = strip_annotations(raw);
    let collapsed = drop_trailing_markers(&stripped);
    collapsed
        .trim_end_matches([',', '.', ';', ':', '，', '。', '；', '：'])
        .trim()
        .to_string()
}

fn strip_annotations(raw: &str) -> String {
    let mut text = raw.to_string();
    for annotation in tables::STRIP_ANNOTATIONS {
        while let Some(range) = find_annotation(&text, annotation) {
            text.replace_range(range, " ");
        }
    }
    text
}

/// Case-insensitive search for an annotation, widened to swallow a bracket
/// pair that immediately encloses it. Matches only at non-alphanumeric
/// boundaries so titles containing the annotation as a fragment are left
/// alone.
fn find_annotation(text: &str, annotation: &str) -> Option<Range<usize>> {
    let haystack = ascii_lower(text);
    let needle = annotation.to_ascii_lowercase();
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(&needle) {
        let start = from + offset;
        let end = start + needle.len();
        if at_word_boundary(&haystack, start, end) {
            return Some(widen_over_brackets(text, start, end));
        }
        from = end;
    }
    None
}

/// ASCII-lowercase a string without moving byte positions, so match offsets
/// found in the lowered copy are valid in the original.
fn ascii_lower(text: &str) -> String {
    text.chars().map(|ch| ch.to_ascii_lowercase()).collect()
}

fn at_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|ch| !ch.is_ascii_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .is_none_or(|ch| !ch.is_ascii_alphanumeric());
    before_ok && after_ok
}

fn widen_over_brackets(text: &str, start: usize, end: usize) -> Range<usize> {
    let open = text[..start].chars().next_back();
    let close = text[end..].chars().next();
    match (open, close) {
        (Some(open @ ('(' | '（')), Some(close @ (')' | '）'))) => {
            start - open.len_utf8()..end + close.len_utf8()
        }
        _ => start..end,
    }
}

/// Drop trailing verse/chorus position markers ("V1", "C2", bare "B") left
/// over from cells that encode an arrangement alongside the title.
fn drop_trailing_markers(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    while let Some(last) = tokens.last() {
        if is_position_marker(last) {
            tokens.pop();
        } else {
            break;
        }
    }
    tokens.join(" ")
}

fn is_position_marker(token: &str) -> bool {
    if token.eq_ignore_ascii_case("b") {
        return true;
    }
    let mut chars = token.chars();
    if !matches!(chars.next(), Some('V' | 'v' | 'C' | 'c')) {
        return false;
    }
    let rest = chars.as_str();
    !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SongCatalog {
        SongCatalog::with_static_tables().expect("static tables load")
    }

    #[test]
    fn annotation_with_brackets_is_swallowed() {
        assert_eq!(clean_song_text("奇異恩典 (Canto)"), "奇異恩典");
        assert_eq!(clean_song_text("奇異恩典（Canto）"), "奇異恩典");
        assert_eq!(clean_song_text("奇異恩典 Canto"), "奇異恩典");
    }

    #[test]
    fn annotation_fragment_inside_word_is_kept() {
        assert_eq!(clean_song_text("Cantonese Hymn"), "Cantonese Hymn");
    }

    #[test]
    fn trailing_markers_are_dropped() {
        assert_eq!(clean_song_text("寶貴十架 V1 V2"), "寶貴十架");
        assert_eq!(clean_song_text("寶貴十架 C1"), "寶貴十架");
        assert_eq!(clean_song_text("寶貴十架 B"), "寶貴十架");
        assert_eq!(clean_song_text("V1 V2"), "");
    }

    #[test]
    fn trailing_punctuation_is_trimmed() {
        assert_eq!(clean_song_text("讚美的孩子,"), "讚美的孩子");
        assert_eq!(clean_song_text("讚美的孩子。"), "讚美的孩子");
    }

    #[test]
    fn empty_cell_yields_no_song() {
        let mut catalog = catalog();
        assert!(catalog.canonicalize("").is_empty());
        assert!(catalog.canonicalize("   ").is_empty());
    }

    #[test]
    fn liturgical_markers_are_not_songs() {
        let mut catalog = catalog();
        assert!(catalog.canonicalize("Communion").is_empty());
        assert!(catalog.canonicalize("Holy Communion").is_empty());
        assert!(catalog.canonicalize("Baptism").is_empty());
    }

    #[test]
    fn first_seen_spelling_wins_display_name() {
        let mut catalog = catalog();
        let first = catalog.canonicalize("主愛大能")[0];
        let second = catalog.canonicalize("主 愛 大 能")[0];
        assert_eq!(first, second);
        assert_eq!(catalog.display_name(first), "主愛大能");
    }

    #[test]
    fn combined_cell_splits_and_filters() {
        let mut catalog = catalog();
        let ids = catalog.canonicalize("主愛大能 + Communion");
        assert_eq!(ids.len(), 1);
        assert_eq!(catalog.display_name(ids[0]), "主愛大能");
    }

    #[test]
    fn conflicting_groups_are_rejected() {
        let groups = [
            AliasGroup {
                display: "First",
                variants: &["Shared Title"],
            },
            AliasGroup {
                display: "Second",
                variants: &["shared title"],
            },
        ];
        let err = SongCatalog::from_groups(&groups).unwrap_err();
        assert!(matches!(err, CanonError::AliasConflict { .. }));
    }
}
