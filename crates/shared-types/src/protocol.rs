//! # Wire Protocol
//!
//! Request/response envelope shared by the server gateway and the officer
//! client. Every message is a JSON object of the form
//!
//! ```json
//! {"kind": "ticket", "payload": { ... }}
//! ```
//!
//! | Kind       | Request payload          | Response payload  |
//! |------------|--------------------------|-------------------|
//! | `auth`     | `AuthRequest`            | `StatusResponse`  |
//! | `offenses` | (none)                   | `OffenseList`     |
//! | `ticket`   | `CreateTicketRequest`    | `TicketResponse`  |
//! | `cancel`   | `CancelTicketRequest`    | `StatusResponse`  |
//! | `tickets`  | `DriverTicketsRequest`   | `TicketList`      |
//! | `failure`  | n/a                      | `StatusResponse`  |
//!
//! Numeric fields accept JSON numbers as well as numeric strings, since
//! older clients sent every form field as text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::entities::{Offense, TicketDraft, TicketId, TicketSummary};
use crate::errors::FailureKind;
use crate::value_objects::Amount;

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

/// Officer login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthRequest {
    pub service_number: String,
    pub password: String,
}

/// Ticket issuance request. `fine` is the amount the officer typed in,
/// before any recidivist doubling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTicketRequest {
    pub driver: String,
    #[serde(alias = "personalId")]
    pub pesel: String,
    #[serde(alias = "offenseName")]
    pub offense: String,
    #[serde(deserialize_with = "optional_number")]
    pub fine: Option<i64>,
    #[serde(deserialize_with = "optional_number")]
    pub penalty_points: Option<i64>,
    pub service_number: String,
    pub recidivist: bool,
}

impl CreateTicketRequest {
    /// Turn the wire request into an issuance draft. The issuer is the
    /// service number carried by the request.
    pub fn into_draft(self) -> TicketDraft {
        TicketDraft {
            driver_description: self.driver,
            personal_id: self.pesel,
            offense_name: self.offense,
            fine_amount: self.fine,
            penalty_points: self.penalty_points,
            is_recidivist: self.recidivist,
            issuer_id: self.service_number,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelTicketRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub ticket_id: TicketId,
}

/// Driver-side lookup of all tickets issued to one personal id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverTicketsRequest {
    #[serde(alias = "personalId")]
    pub pesel: String,
}

/// Accepts a number, a numeric string, an empty string or null.
/// Blank strings and null both mean "not entered".
fn optional_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("`{text}` is not an integer")))
        }
    }
}

// =============================================================================
// RESPONSE PAYLOADS
// =============================================================================

/// Boolean outcome plus, on failure, one corrective message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailureKind>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            error: None,
        }
    }

    pub fn rejected(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: Some(kind),
        }
    }
}

impl From<bool> for StatusResponse {
    fn from(success: bool) -> Self {
        Self {
            success,
            message: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<TicketId>,
    /// Final fine after doubling, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailureKind>,
}

impl TicketResponse {
    pub fn issued(ticket_id: TicketId, fine_amount: Amount) -> Self {
        Self {
            success: true,
            ticket_id: Some(ticket_id),
            fine_amount: Some(fine_amount),
            message: None,
            error: None,
        }
    }

    pub fn rejected(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            ticket_id: None,
            fine_amount: None,
            message: Some(message.into()),
            error: Some(kind),
        }
    }
}

/// Catalog listing. The `offences` key matches the legacy HTTP endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffenseList {
    pub offences: Vec<Offense>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketList {
    pub tickets: Vec<TicketSummary>,
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum Request {
    Auth(AuthRequest),
    Offenses,
    Ticket(CreateTicketRequest),
    Cancel(CancelTicketRequest),
    Tickets(DriverTicketsRequest),
}

impl Request {
    /// Envelope tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Offenses => "offenses",
            Self::Ticket(_) => "ticket",
            Self::Cancel(_) => "cancel",
            Self::Tickets(_) => "tickets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum Response {
    Auth(StatusResponse),
    Offenses(OffenseList),
    Ticket(TicketResponse),
    Cancel(StatusResponse),
    Tickets(TicketList),
    /// The request could not be decoded or did not match any operation.
    Failure(StatusResponse),
}

impl Response {
    /// Generic failure for requests that could not be decoded.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Failure(StatusResponse::rejected(
            FailureKind::MalformedRequest,
            message,
        ))
    }

    pub fn is_success(&self) -> bool {
        match self {
            Self::Auth(status) | Self::Cancel(status) | Self::Failure(status) => status.success,
            Self::Ticket(ticket) => ticket.success,
            Self::Offenses(_) | Self::Tickets(_) => true,
        }
    }
}
