//! Copyright-holder canonicalization.

use std::collections::BTreeMap;

use tracing::debug;
use wj_model::{CanonicalPublisher, PublisherId};

use crate::error::{CanonError, Result};
use crate::normalize::{CanonicalForm, normalize};
use crate::tables::{self, AliasGroup};

/// Bucket for songs with no usable copyright metadata.
pub const UNKNOWN_PUBLISHER: &str = "Unknown";

/// Publisher alias-group index plus a song-level override table.
///
/// The override table exists because the song index is known to miss or
/// misreport copyright for a handful of songs; an override always wins over
/// the raw metadata string.
#[derive(Debug, Clone)]
pub struct PublisherCatalog {
    publishers: Vec<CanonicalPublisher>,
    index: BTreeMap<CanonicalForm, PublisherId>,
    overrides: BTreeMap<CanonicalForm, PublisherId>,
    unknown: PublisherId,
}

impl PublisherCatalog {
    /// Catalog seeded with the built-in alias and override tables.
    pub fn with_static_tables() -> Result<Self> {
        Self::from_tables(tables::PUBLISHER_ALIASES, tables::PUBLISHER_OVERRIDES)
    }

    /// Catalog seeded from explicit tables.
    pub fn from_tables(groups: &[AliasGroup], overrides: &[(&str, &str)]) -> Result<Self> {
        let mut catalog = Self {
            publishers: Vec::new(),
            index: BTreeMap::new(),
            overrides: BTreeMap::new(),
            unknown: PublisherId(0),
        };
        catalog.unknown = catalog.intern(UNKNOWN_PUBLISHER);
        for group in groups {
            let id = PublisherId(catalog.publishers.len() as u32);
            let mut publisher = CanonicalPublisher::new(group.display);
            for variant in group.variants {
                publisher.add_variant(variant);
            }
            catalog.publishers.push(publisher);
            catalog.claim(normalize(group.display), id)?;
            for variant in group.variants {
                catalog.claim(normalize(variant), id)?;
            }
        }
        for (song, publisher) in overrides {
            let id = catalog.intern(publisher);
            catalog.overrides.insert(normalize(song), id);
        }
        Ok(catalog)
    }

    /// Resolve a raw copyright string to a publisher identity.
    ///
    /// `song` is the canonical display name of the song the string was read
    /// for; when that song has an override, the override wins
    /// unconditionally. An empty or missing copyright string resolves to the
    /// [`UNKNOWN_PUBLISHER`] bucket.
    pub fn canonicalize(&mut self, raw: &str, song: Option<&str>) -> PublisherId {
        if let Some(song) = song
            && let Some(id) = self.overrides.get(&normalize(song))
        {
            return *id;
        }
        let cleaned = clean_publisher_text(raw);
        if cleaned.is_empty() {
            return self.unknown;
        }
        self.intern(&cleaned)
    }

    pub fn display_name(&self, id: PublisherId) -> &str {
        &self.publishers[id.0 as usize].display_name
    }

    pub fn publisher(&self, id: PublisherId) -> &CanonicalPublisher {
        &self.publishers[id.0 as usize]
    }

    pub fn unknown(&self) -> PublisherId {
        self.unknown
    }

    fn intern(&mut self, cleaned: &str) -> PublisherId {
        let form = normalize(cleaned);
        if let Some(id) = self.index.get(&form).copied() {
            self.publishers[id.0 as usize].add_variant(cleaned);
            return id;
        }
        let id = PublisherId(self.publishers.len() as u32);
        debug!(publisher = cleaned, "new publisher identity");
        self.publishers.push(CanonicalPublisher::new(cleaned));
        self.index.insert(form, id);
        id
    }

    fn claim(&mut self, form: CanonicalForm, id: PublisherId) -> Result<()> {
        match self.index.get(&form) {
            Some(existing) if *existing != id => Err(CanonError::AliasConflict {
                form: form.as_str().to_string(),
                first: self.publishers[existing.0 as usize].display_name.clone(),
                second: self.publishers[id.0 as usize].display_name.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.index.insert(form, id);
                Ok(())
            }
        }
    }
}

/// Strip formatting noise the copyright column tends to carry: surrounding
/// backticks and quotes, and a trailing parenthesized remark.
fn clean_publisher_text(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_matches(['`', '"', '\'', '“', '”', '‘', '’'])
        .trim();
    let without_note = match trimmed.rfind(['(', '（']) {
        Some(idx) if idx > 0 && trimmed[idx..].ends_with([')', '）']) => {
            trimmed[..idx].trim_end()
        }
        _ => trimmed,
    };
    without_note.to_string()
}
