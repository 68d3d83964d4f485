//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Catalog**: `Offense` (name, penalty-point and fine ranges, recidivism flag)
//! - **Issuance**: `TicketDraft` (operator input), `NewTicket` (validated,
//!   not yet persisted), `Ticket` (persisted, carries the server-assigned id)
//! - **Driver view**: `TicketSummary`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::OffenseError;
use crate::value_objects::{Amount, Bounds, Points};

/// Server-assigned ticket identifier. Valid ids are strictly positive.
pub type TicketId = i64;

/// Officer identifier (the login of the issuing officer).
pub type ServiceNumber = String;

// =============================================================================
// CLUSTER A: THE CATALOG
// =============================================================================

/// A named traffic violation with allowed penalty-point and fine ranges.
///
/// Fields are private: once built (and therefore validated) an `Offense`
/// never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OffenseRecord", into = "OffenseRecord")]
pub struct Offense {
    name: String,
    penalty_points: Bounds,
    fine: Bounds,
    recidivist: bool,
}

impl Offense {
    pub fn new(
        name: impl Into<String>,
        penalty_points_min: Points,
        penalty_points_max: Points,
        fine_min: Amount,
        fine_max: Amount,
        recidivist: bool,
    ) -> Result<Self, OffenseError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OffenseError::EmptyName);
        }
        Ok(Self {
            name,
            penalty_points: Bounds::new("penalty points", penalty_points_min, penalty_points_max)?,
            fine: Bounds::new("fine", fine_min, fine_max)?,
            recidivist,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn penalty_points(&self) -> Bounds {
        self.penalty_points
    }

    pub fn fine(&self) -> Bounds {
        self.fine
    }

    pub fn penalty_points_min(&self) -> Points {
        self.penalty_points.min()
    }

    pub fn penalty_points_max(&self) -> Points {
        self.penalty_points.max()
    }

    pub fn fine_min(&self) -> Amount {
        self.fine.min()
    }

    pub fn fine_max(&self) -> Amount {
        self.fine.max()
    }

    /// Whether repeat offenders get a doubled fine for this offense.
    pub fn recidivist(&self) -> bool {
        self.recidivist
    }
}

/// Flat wire form of an [`Offense`].
///
/// Serialized in camelCase. Snake_case database column names
/// (`penalty_points_min`, `is_recidivist`, ...) are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenseRecord {
    pub name: String,
    #[serde(alias = "penalty_points_min")]
    pub penalty_points_min: Points,
    #[serde(alias = "penalty_points_max")]
    pub penalty_points_max: Points,
    #[serde(alias = "fine_min")]
    pub fine_min: Amount,
    #[serde(alias = "fine_max")]
    pub fine_max: Amount,
    #[serde(alias = "is_recidivist")]
    pub recidivist: bool,
}

impl TryFrom<OffenseRecord> for Offense {
    type Error = OffenseError;

    fn try_from(record: OffenseRecord) -> Result<Self, Self::Error> {
        Offense::new(
            record.name,
            record.penalty_points_min,
            record.penalty_points_max,
            record.fine_min,
            record.fine_max,
            record.recidivist,
        )
    }
}

impl From<Offense> for OffenseRecord {
    fn from(offense: Offense) -> Self {
        Self {
            penalty_points_min: offense.penalty_points_min(),
            penalty_points_max: offense.penalty_points_max(),
            fine_min: offense.fine_min(),
            fine_max: offense.fine_max(),
            recidivist: offense.recidivist,
            name: offense.name,
        }
    }
}

// =============================================================================
// CLUSTER B: ISSUANCE
// =============================================================================

/// Operator input for one ticket-issuance attempt.
///
/// Numeric fields are optional because "not yet entered" is a distinct
/// state from any number: it aborts the attempt as incomplete input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub driver_description: String,
    /// The driver's PESEL.
    pub personal_id: String,
    pub offense_name: String,
    pub fine_amount: Option<Amount>,
    pub penalty_points: Option<Points>,
    pub is_recidivist: bool,
    /// Service number of the authenticated officer. Attached server side.
    pub issuer_id: ServiceNumber,
}

/// A ticket that passed validation and had its fine adjusted, ready to be
/// handed to a ticket store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub driver_description: String,
    pub personal_id: String,
    pub offense_name: String,
    /// Final fine, after recidivist doubling.
    pub fine_amount: Amount,
    pub penalty_points: Points,
    pub is_recidivist: bool,
    pub issuer_id: ServiceNumber,
    pub issued_at: DateTime<Utc>,
}

/// A persisted ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: TicketId,
    #[serde(flatten)]
    pub details: NewTicket,
}

impl Ticket {
    pub fn new(ticket_id: TicketId, details: NewTicket) -> Self {
        Self { ticket_id, details }
    }
}

// =============================================================================
// CLUSTER C: DRIVER VIEW
// =============================================================================

/// What a driver sees about one of their tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub ticket_id: TicketId,
    #[serde(alias = "driver_name")]
    pub driver_name: String,
    pub offense: String,
    #[serde(alias = "fine_amount")]
    pub fine_amount: Amount,
    #[serde(alias = "penalty_points")]
    pub penalty_points: Points,
    #[serde(alias = "issue_date")]
    pub issue_date: DateTime<Utc>,
}

impl From<&Ticket> for TicketSummary {
    fn from(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.ticket_id,
            driver_name: ticket.details.driver_description.clone(),
            offense: ticket.details.offense_name.clone(),
            fine_amount: ticket.details.fine_amount,
            penalty_points: ticket.details.penalty_points,
            issue_date: ticket.details.issued_at,
        }
    }
}
