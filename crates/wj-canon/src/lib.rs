//! Canonicalization engine for the worship journey pipeline.
//!
//! Decides when two textually different strings denote the same real-world
//! entity: character-equivalence folding, punctuation normalization,
//! annotation stripping, multi-value splitting, and static alias-group
//! resolution for songs, publishers, and leader names.

pub mod error;
pub mod leader;
pub mod normalize;
pub mod publisher;
pub mod song;
pub mod tables;

pub use error::{CanonError, Result};
pub use leader::canonicalize_leader;
pub use normalize::{CanonicalForm, normalize};
pub use publisher::{PublisherCatalog, UNKNOWN_PUBLISHER};
pub use song::SongCatalog;
pub use tables::AliasGroup;
