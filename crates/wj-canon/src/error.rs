//! Error types for alias-table loading.

use thiserror::Error;

/// Errors raised while building the canonicalization catalogs.
#[derive(Debug, Error)]
pub enum CanonError {
    /// One canonical form is claimed by two different alias groups. This is a
    /// configuration defect; resolution must not silently pick a side.
    #[error("alias conflict: '{form}' belongs to both '{first}' and '{second}'")]
    AliasConflict {
        form: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, CanonError>;
