use serde::{Deserialize, Serialize};

/// Interned identity of one real-world song.
///
/// Ids are assigned by the song catalog in load order and are only meaningful
/// within the run that produced them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SongId(pub u32);

/// Interned identity of one copyright holder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PublisherId(pub u32);

/// A song identity together with every raw spelling known to denote it.
///
/// The display name is stable for the run: either the declared name of a
/// static alias group, or the first raw variant encountered in the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalSong {
    pub display_name: String,
    /// Raw variants in first-seen order. The display name is always present.
    pub variants: Vec<String>,
}

impl CanonicalSong {
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let variants = vec![display_name.clone()];
        Self {
            display_name,
            variants,
        }
    }

    /// Record a raw spelling for this song, keeping variants deduplicated.
    pub fn add_variant(&mut self, raw: &str) {
        if !self.variants.iter().any(|v| v == raw) {
            self.variants.push(raw.to_string());
        }
    }
}

/// A copyright-holder identity with its known raw spellings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalPublisher {
    pub display_name: String,
    pub variants: Vec<String>,
}

impl CanonicalPublisher {
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let variants = vec![display_name.clone()];
        Self {
            display_name,
            variants,
        }
    }

    pub fn add_variant(&mut self, raw: &str) {
        if !self.variants.iter().any(|v| v == raw) {
            self.variants.push(raw.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_deduplicate() {
        let mut song = CanonicalSong::new("Cornerstone");
        song.add_variant("Cornerstone");
        song.add_variant("房角基石");
        song.add_variant("房角基石");
        assert_eq!(song.variants, vec!["Cornerstone", "房角基石"]);
    }
}
