//! Aggregation engine.
//!
//! Consumes the immutable record set plus the frozen canonicalization
//! catalogs and produces the full statistics object. Everything here is a
//! pure function of its inputs; rankings carry explicit tie-breaks so the
//! result does not depend on evaluation order.

pub mod global;
pub mod leader;
pub mod pairing;
pub mod publishers;

mod counter;

use std::collections::{BTreeMap, BTreeSet};

use wj_canon::SongCatalog;
use wj_model::{JourneyStats, ServiceRecord, SongId};

pub use global::global_stats;
pub use leader::leader_stats;
pub use pairing::weekend_roles;
pub use publishers::resolve_song_publishers;

/// Compute the complete statistics object for one target year.
///
/// Either the whole object is produced or nothing is; there is no partial
/// failure path past this point.
pub fn compute_stats(
    records: &[ServiceRecord],
    catalog: &SongCatalog,
    reference: &BTreeSet<SongId>,
    publishers: &BTreeMap<SongId, String>,
    year: i32,
) -> JourneyStats {
    JourneyStats {
        leaders: leader_stats(records, catalog, year),
        global: global_stats(records, catalog, reference, publishers, year),
    }
}
