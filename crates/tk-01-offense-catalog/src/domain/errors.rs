//! Offense catalog error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The source could not be reached, could not be parsed, or yielded an
    /// invalid offense set.
    #[error("offense catalog unavailable: {0}")]
    Unavailable(String),

    /// No offense with this name.
    #[error("unknown offense: {0}")]
    NotFound(String),

    /// Two offenses share a name.
    #[error("duplicate offense name: {0}")]
    Duplicate(String),
}
