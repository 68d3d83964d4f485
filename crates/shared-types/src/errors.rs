//! # Error Types
//!
//! Defines error types shared across subsystems and the failure taxonomy
//! carried in protocol responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing an `Offense`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffenseError {
    /// Offense names are catalog keys and must not be blank.
    #[error("offense name must not be empty")]
    EmptyName,

    /// A range bound was below zero.
    #[error("{field} lower bound {value} is negative")]
    NegativeBound { field: &'static str, value: i64 },

    /// A range had `min > max`.
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Failure categories reported across the network boundary.
///
/// Every failed response carries exactly one of these together with a
/// single human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    IncompleteInput,
    UnknownOffense,
    InvalidPersonalId,
    FineOutOfRange,
    PenaltyOutOfRange,
    AuthenticationFailed,
    TransportFailure,
    PersistenceFailed,
    NotFound,
    /// The request could not be decoded (missing field, wrong type, bad JSON).
    MalformedRequest,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::IncompleteInput => "incomplete input",
            Self::UnknownOffense => "unknown offense",
            Self::InvalidPersonalId => "invalid personal id",
            Self::FineOutOfRange => "fine out of range",
            Self::PenaltyOutOfRange => "penalty points out of range",
            Self::AuthenticationFailed => "authentication failed",
            Self::TransportFailure => "transport failure",
            Self::PersistenceFailed => "persistence failed",
            Self::NotFound => "not found",
            Self::MalformedRequest => "malformed request",
        };
        f.write_str(name)
    }
}
