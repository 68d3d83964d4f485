//! Ticket issuance error types.
//!
//! `IssueError` is what an issuance attempt aborts with. Its `Display` text
//! is the single corrective message shown to the officer.

use std::fmt;

use shared_types::{Bounds, FailureKind};
use thiserror::Error;
use tk_02_ticket_validation::{describe_range, PERSONAL_ID_LENGTH};

/// Pipeline step at which an attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuanceStage {
    Collect,
    Resolve,
    Validate,
    Adjust,
    Persist,
}

impl fmt::Display for IssuanceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Collect => "collect",
            Self::Resolve => "resolve",
            Self::Validate => "validate",
            Self::Adjust => "adjust",
            Self::Persist => "persist",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueError {
    #[error("Fields must not be empty")]
    IncompleteInput,

    #[error("Unknown offense: {0}")]
    UnknownOffense(String),

    #[error("PESEL must be exactly {} characters long", PERSONAL_ID_LENGTH)]
    InvalidPersonalId,

    #[error("{}", fine_message(.bounds))]
    FineOutOfRange { bounds: Bounds },

    #[error("{}", penalty_message(.bounds))]
    PenaltyOutOfRange { bounds: Bounds },

    #[error("Ticket could not be saved")]
    PersistenceFailed,
}

fn fine_message(bounds: &Bounds) -> String {
    describe_range("Fine", *bounds)
}

fn penalty_message(bounds: &Bounds) -> String {
    describe_range("Penalty points", *bounds)
}

impl IssueError {
    pub fn stage(&self) -> IssuanceStage {
        match self {
            Self::IncompleteInput => IssuanceStage::Collect,
            Self::UnknownOffense(_) => IssuanceStage::Resolve,
            Self::InvalidPersonalId | Self::FineOutOfRange { .. } | Self::PenaltyOutOfRange { .. } => {
                IssuanceStage::Validate
            }
            Self::PersistenceFailed => IssuanceStage::Persist,
        }
    }

    /// Wire failure category.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::IncompleteInput => FailureKind::IncompleteInput,
            Self::UnknownOffense(_) => FailureKind::UnknownOffense,
            Self::InvalidPersonalId => FailureKind::InvalidPersonalId,
            Self::FineOutOfRange { .. } => FailureKind::FineOutOfRange,
            Self::PenaltyOutOfRange { .. } => FailureKind::PenaltyOutOfRange,
            Self::PersistenceFailed => FailureKind::PersistenceFailed,
        }
    }
}

/// Errors raised by `TicketStore` implementations. They are logged by the
/// service and never cross the network boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketStoreError {
    #[error("ticket store unavailable: {0}")]
    Unavailable(String),

    #[error("ticket store rejected the operation: {0}")]
    Rejected(String),

    #[error("ticket store did not answer in time")]
    Timeout,
}
